//! Bayes Reasoning common types and errors.
//!
//! This crate provides foundational types shared across the workspace:
//! - Common error type with stable error codes
//! - Query identifiers for the joint-posterior log
//! - Output format selection
//! - Report schema versioning

pub mod error;
pub mod id;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use id::QueryId;
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
