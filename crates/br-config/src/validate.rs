//! Semantic checks on a structurally valid configuration.
//!
//! None of these block inference: priors that do not sum to one or
//! probabilities outside [0, 1] produce meaningless numbers, not crashes, so
//! they are reported as warnings and left to the user.

use serde::Serialize;
use tracing::warn;

use crate::model::Configuration;

/// Tolerance used when checking that priors sum to one.
pub const PRIOR_SUM_TOLERANCE: f64 = 1e-6;

/// Machine-readable warning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    PriorsNotNormalized,
    PriorOutOfRange,
    LikelihoodOutOfRange,
    ImpossibleFact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationWarning {
    pub code: WarningCode,
    pub message: String,
}

/// Outcome of semantic validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn has(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    fn push(&mut self, code: WarningCode, message: String) {
        warn!(?code, "{}", message);
        self.warnings.push(ValidationWarning { code, message });
    }
}

fn in_unit_interval(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// Run every semantic check and collect the warnings.
pub fn validate_semantics(config: &Configuration) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !config.priors_sum_to_one(PRIOR_SUM_TOLERANCE) {
        let sum: f64 = config.prior_vector().iter().sum();
        result.push(
            WarningCode::PriorsNotNormalized,
            format!("priors sum to {}, not 1", sum),
        );
    }

    for h in config.hypotheses() {
        if !in_unit_interval(h.prior) {
            result.push(
                WarningCode::PriorOutOfRange,
                format!("prior of {} is {}, outside [0, 1]", h.name, h.prior),
            );
        }
    }

    let names = config.hypothesis_names();
    for f in config.facts() {
        for (i, p) in f.likelihoods.iter().enumerate() {
            if !in_unit_interval(*p) {
                result.push(
                    WarningCode::LikelihoodOutOfRange,
                    format!(
                        "P({} | {}) is {}, outside [0, 1]",
                        f.name, names[i], p
                    ),
                );
            }
        }
        if f.likelihoods.iter().all(|p| *p == 0.0) {
            result.push(
                WarningCode::ImpossibleFact,
                format!(
                    "fact {} has zero likelihood under every hypothesis; its posterior is undefined",
                    f.name
                ),
            );
        }
    }

    result
}
