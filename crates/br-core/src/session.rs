//! Caller-controlled history of joint-posterior queries.
//!
//! The engine returns fresh results per call; a driver that wants to show
//! every query of an exploratory session appends them here.

use br_common::QueryId;
use br_math::Precision;
use serde::Serialize;

use crate::inference::{BayesEngine, InferenceError, JointPosterior};

/// One recorded joint-posterior query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointQuery {
    pub id: QueryId,
    pub indices: Vec<usize>,
    pub facts: Vec<String>,
    pub precision: Precision,
    pub posteriors: Vec<JointPosterior>,
}

#[derive(Debug, Clone)]
pub struct QueryLog {
    next_id: QueryId,
    queries: Vec<JointQuery>,
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryLog {
    pub fn new() -> Self {
        Self {
            next_id: QueryId::FIRST,
            queries: Vec::new(),
        }
    }

    /// Run a joint query against `engine` and append it on success.
    ///
    /// A failed query leaves the log untouched.
    pub fn run(
        &mut self,
        engine: &BayesEngine,
        indices: &[usize],
        precision: Precision,
    ) -> Result<&JointQuery, InferenceError> {
        let posteriors = engine.joint_posterior(indices, precision)?;
        let facts = posteriors
            .first()
            .map(|p| p.facts.clone())
            .unwrap_or_default();
        let id = self.next_id;
        self.next_id = id.next();
        self.queries.push(JointQuery {
            id,
            indices: indices.to_vec(),
            facts,
            precision,
            posteriors,
        });
        Ok(&self.queries[self.queries.len() - 1])
    }

    pub fn queries(&self) -> &[JointQuery] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn into_queries(self) -> Vec<JointQuery> {
        self.queries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_config::Configuration;

    #[test]
    fn queries_accumulate_in_order() {
        let engine = BayesEngine::new(Configuration::example().unwrap());
        let mut log = QueryLog::new();
        log.run(&engine, &[0], Precision::DEFAULT).unwrap();
        log.run(&engine, &[0, 2], Precision::new(2)).unwrap();

        assert_eq!(log.len(), 2);
        let ids: Vec<QueryId> = log.queries().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![QueryId(1), QueryId(2)]);
        assert_eq!(log.queries()[1].facts, vec!["Fever", "Fatigue"]);
        assert_eq!(log.queries()[1].precision.digits(), 2);
    }

    #[test]
    fn failed_query_is_not_recorded() {
        let engine = BayesEngine::new(Configuration::example().unwrap());
        let mut log = QueryLog::new();
        assert!(log.run(&engine, &[7], Precision::DEFAULT).is_err());
        assert!(log.is_empty());

        let q = log.run(&engine, &[1], Precision::DEFAULT).unwrap();
        assert_eq!(q.id, QueryId::FIRST);
    }
}
