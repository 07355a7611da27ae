//! Query-time inference errors.
//!
//! All of these are recoverable: the configuration stays valid and the
//! caller may retry with different input.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which list an out-of-range index pointed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    Fact,
    Hypothesis,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Fact => write!(f, "fact"),
            IndexKind::Hypothesis => write!(f, "hypothesis"),
        }
    }
}

/// Errors raised during marginal or posterior computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("{kind} index {index} out of range (0..{len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    #[error("division by zero: {context}")]
    DivisionByZero { context: String },

    #[error("no facts selected")]
    EmptySelection,

    #[error("fact {fact} has {actual} likelihoods, expected {expected}")]
    LikelihoodLength {
        fact: String,
        expected: usize,
        actual: usize,
    },

    #[error("marginals cover {actual} facts, configuration has {expected}")]
    MarginalsMismatch { expected: usize, actual: usize },

    #[error("numerical instability detected: {0}")]
    NumericalInstability(String),
}

impl From<InferenceError> for br_common::Error {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::IndexOutOfRange { kind, index, len } => {
                br_common::Error::IndexOutOfRange {
                    kind: kind.to_string(),
                    index,
                    len,
                }
            }
            InferenceError::DivisionByZero { context } => br_common::Error::DivisionByZero(context),
            other => br_common::Error::Inference(other.to_string()),
        }
    }
}
