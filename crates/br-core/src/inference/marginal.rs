//! Marginal probability of each fact, P(F) = Σᵢ P(F|hᵢ)·P(hᵢ).

use br_config::Configuration;
use br_math::{weighted_sum, Precision};
use serde::Serialize;
use tracing::debug;

use super::error::InferenceError;

/// Rounded marginal of one fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginalEntry {
    pub fact: String,
    pub probability: f64,
}

/// Marginals for every fact, in fact order.
///
/// Values are rounded to five digits once, here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Marginals {
    entries: Vec<MarginalEntry>,
}

impl Marginals {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rounded P(F) by fact name.
    pub fn get(&self, fact: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.fact == fact)
            .map(|e| e.probability)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarginalEntry> {
        self.entries.iter()
    }
}

/// Compute P(F) for every fact, summing over hypotheses in index order.
pub fn compute_marginals(config: &Configuration) -> Result<Marginals, InferenceError> {
    let priors = config.prior_vector();
    let mut entries = Vec::with_capacity(config.fact_count());

    for fact in config.facts() {
        let sum = weighted_sum(&priors, &fact.likelihoods).ok_or_else(|| {
            InferenceError::LikelihoodLength {
                fact: fact.name.clone(),
                expected: priors.len(),
                actual: fact.likelihoods.len(),
            }
        })?;
        debug!(fact = %fact.name, marginal = sum, "computed marginal");
        entries.push(MarginalEntry {
            fact: fact.name.clone(),
            probability: Precision::DEFAULT.apply(sum),
        });
    }

    Ok(Marginals { entries })
}
