//! Configuration errors.
//!
//! Every variant is fatal for the session: a configuration that fails here
//! never reaches the engine.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document: {0}")]
    Parse(String),

    #[error("document root must be a mapping with keys Hypotheses and Facts")]
    NotAMapping,

    #[error("key {0} not recognized")]
    UnknownKey(String),

    #[error("no hypotheses defined")]
    EmptyHypotheses,

    #[error("no facts defined")]
    EmptyFacts,

    #[error("fact {fact} has {actual} likelihoods, expected {expected} (one per hypothesis)")]
    LikelihoodLength {
        fact: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{field} is not a finite number")]
    NonFinite { field: String },

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("no configuration files found in {}", .dir.display())]
    NoConfigFound { dir: PathBuf },

    #[error("configuration index {index} not available ({available} files found)")]
    NoSuchConfig { index: usize, available: usize },
}

impl From<ConfigError> for br_common::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { source, .. } => br_common::Error::Io(source),
            ConfigError::NoConfigFound { dir } => br_common::Error::NoConfigFound {
                dir: dir.display().to_string(),
            },
            ConfigError::UnsupportedFormat(ext) => br_common::Error::UnsupportedFormat(ext),
            other => br_common::Error::Config(other.to_string()),
        }
    }
}
