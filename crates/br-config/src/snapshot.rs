//! Configuration snapshots.
//!
//! A snapshot pins a report to the exact document it was computed from.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::model::Configuration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    /// Where the document came from (a path, or `<embedded example>`).
    pub source: String,
    /// Hex SHA-256 of the raw document bytes.
    pub sha256: String,
    pub hypothesis_count: usize,
    pub fact_count: usize,
}

impl ConfigSnapshot {
    pub fn capture(source: impl Into<String>, raw: &[u8], config: &Configuration) -> Self {
        Self {
            source: source.into(),
            sha256: sha256_hex(raw),
            hypothesis_count: config.hypothesis_count(),
            fact_count: config.fact_count(),
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
