//! Bayes Reasoning configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for hypothesis/fact documents (YAML or JSON)
//! - Structural validation that runs before any inference
//! - Semantic checks reported as warnings
//! - Discovery of configuration files in a directory
//! - Config snapshots (content hash) for reproducible reports

pub mod error;
pub mod model;
pub mod resolve;
pub mod snapshot;
pub mod validate;

pub use error::ConfigError;
pub use model::{ConfigFormat, Configuration, Fact, Hypothesis};
pub use resolve::{discover_configs, load_config, select_config, LoadedConfig};
pub use snapshot::ConfigSnapshot;
pub use validate::{validate_semantics, ValidationResult, ValidationWarning, WarningCode};

/// Top-level document key holding the hypothesis list.
pub const HYPOTHESES_KEY: &str = "Hypotheses";

/// Top-level document key holding the fact list.
pub const FACTS_KEY: &str = "Facts";
