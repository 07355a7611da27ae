//! Stateful Bayes calculator.
//!
//! `BayesEngine` owns one [`Configuration`] and memoizes its marginals:
//!
//! ```text
//! Uninitialized ──marginals()──▶ MarginalsReady ──single_posteriors()──▶ PosteriorsReady
//!       ▲                              │
//!       └──────────── reset() ─────────┘
//! ```
//!
//! Every transition is idempotent and posterior queries trigger marginal
//! computation themselves, so call order never matters. Joint queries do
//! not touch the cache at all and return fresh results on every call.

use br_config::{Configuration, Fact, Hypothesis};
use br_math::Precision;
use tracing::debug;

use super::error::{IndexKind, InferenceError};
use super::marginal::{compute_marginals, Marginals};
use super::posterior::{
    compute_joint_posterior, compute_single_posteriors, select_facts, JointPosterior,
    SinglePosterior,
};

#[derive(Debug, Clone)]
pub struct BayesEngine {
    config: Configuration,
    marginals: Option<Marginals>,
}

/// Return the cached marginals, computing them on first use.
fn cached<'a>(
    slot: &'a mut Option<Marginals>,
    config: &Configuration,
) -> Result<&'a Marginals, InferenceError> {
    let marginals = match slot.take() {
        Some(m) => m,
        None => {
            debug!("computing marginals");
            compute_marginals(config)?
        }
    };
    Ok(slot.insert(marginals))
}

impl BayesEngine {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            marginals: None,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Whether marginals are already cached.
    pub fn has_marginals(&self) -> bool {
        self.marginals.is_some()
    }

    /// Drop cached results; the next query recomputes them.
    pub fn reset(&mut self) {
        self.marginals = None;
    }

    /// P(F) for every fact.
    pub fn marginals(&mut self) -> Result<&Marginals, InferenceError> {
        cached(&mut self.marginals, &self.config)
    }

    /// P(h|F) for every (fact, hypothesis) pair, fact-major.
    pub fn single_posteriors(&mut self) -> Result<Vec<SinglePosterior>, InferenceError> {
        let marginals = cached(&mut self.marginals, &self.config)?;
        compute_single_posteriors(&self.config, marginals)
    }

    /// Resolve fact indices to facts, in order, duplicates kept.
    pub fn select_facts(&self, indices: &[usize]) -> Result<Vec<&Fact>, InferenceError> {
        select_facts(&self.config, indices)
    }

    /// P(h|F₁..Fₖ) for every hypothesis, treating the selected facts as
    /// conditionally independent.
    pub fn joint_posterior(
        &self,
        indices: &[usize],
        precision: Precision,
    ) -> Result<Vec<JointPosterior>, InferenceError> {
        compute_joint_posterior(&self.config, indices, precision)
    }

    pub fn hypothesis(&self, index: usize) -> Result<&Hypothesis, InferenceError> {
        self.config
            .hypothesis(index)
            .ok_or(InferenceError::IndexOutOfRange {
                kind: IndexKind::Hypothesis,
                index,
                len: self.config.hypothesis_count(),
            })
    }

    pub fn fact(&self, index: usize) -> Result<&Fact, InferenceError> {
        self.config.fact(index).ok_or(InferenceError::IndexOutOfRange {
            kind: IndexKind::Fact,
            index,
            len: self.config.fact_count(),
        })
    }
}
