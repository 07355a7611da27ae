//! Bayes engine: marginals, single-fact posteriors and joint posteriors.

pub mod engine;
pub mod error;
pub mod marginal;
pub mod posterior;

pub use engine::BayesEngine;
pub use error::{IndexKind, InferenceError};
pub use marginal::{compute_marginals, MarginalEntry, Marginals};
pub use posterior::{
    compute_joint_posterior, compute_single_posteriors, select_facts, JointPosterior,
    SinglePosterior,
};
