//! Hypothesis and fact configuration types.
//!
//! A document has exactly two top-level keys:
//!
//! ```yaml
//! Hypotheses:
//!   - name: A
//!     prob: 0.5          # prior P(h)
//! Facts:
//!   - name: X
//!     prob: [0.8, 0.2]   # P(X | h) for each hypothesis, in order
//! ```
//!
//! A [`Configuration`] can only be obtained through a validating path, so the
//! engine may rely on its structural invariants.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{FACTS_KEY, HYPOTHESES_KEY};

/// Embedded demonstration configuration.
pub const EXAMPLE_YAML: &str = include_str!("presets/example.yaml");

/// A mutually exclusive hypothesis with its prior probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub name: String,

    /// P(h).
    #[serde(rename = "prob", alias = "prior")]
    pub prior: f64,
}

impl Hypothesis {
    pub fn new(name: impl Into<String>, prior: f64) -> Self {
        Self {
            name: name.into(),
            prior,
        }
    }
}

/// An observable fact with one likelihood per hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,

    /// `likelihoods[i]` = P(fact | hypothesis i).
    #[serde(rename = "prob", alias = "likelihoods")]
    pub likelihoods: Vec<f64>,
}

impl Fact {
    pub fn new(name: impl Into<String>, likelihoods: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            likelihoods,
        }
    }

    /// P(fact | hypothesis `index`).
    pub fn likelihood(&self, index: usize) -> Option<f64> {
        self.likelihoods.get(index).copied()
    }
}

/// Serialized form of a configuration document.
///
/// A missing or null list reads as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(rename = "Hypotheses", default)]
    hypotheses: Option<Vec<Hypothesis>>,

    #[serde(rename = "Facts", default)]
    facts: Option<Vec<Fact>>,
}

/// Document format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// File extensions recognized during discovery.
    pub const EXTENSIONS: &'static [&'static str] = &["yaml", "yml", "json"];

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "" => Err(ConfigError::UnsupportedFormat(format!(
                "{} has no extension",
                path.display()
            ))),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Validated hypothesis space and evidence table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument", into = "RawDocument")]
pub struct Configuration {
    hypotheses: Vec<Hypothesis>,
    facts: Vec<Fact>,
}

impl Configuration {
    /// Build a configuration, enforcing the structural invariants:
    /// non-empty lists, unique names, finite numbers, and one likelihood per
    /// hypothesis for every fact.
    pub fn new(hypotheses: Vec<Hypothesis>, facts: Vec<Fact>) -> Result<Self, ConfigError> {
        if hypotheses.is_empty() {
            return Err(ConfigError::EmptyHypotheses);
        }
        if facts.is_empty() {
            return Err(ConfigError::EmptyFacts);
        }

        let mut seen = HashSet::new();
        for h in &hypotheses {
            if !seen.insert(h.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    kind: "hypothesis",
                    name: h.name.clone(),
                });
            }
            if !h.prior.is_finite() {
                return Err(ConfigError::NonFinite {
                    field: format!("prior of hypothesis {}", h.name),
                });
            }
        }

        let expected = hypotheses.len();
        let mut seen = HashSet::new();
        for f in &facts {
            if !seen.insert(f.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    kind: "fact",
                    name: f.name.clone(),
                });
            }
            if f.likelihoods.len() != expected {
                return Err(ConfigError::LikelihoodLength {
                    fact: f.name.clone(),
                    expected,
                    actual: f.likelihoods.len(),
                });
            }
            if let Some(i) = f.likelihoods.iter().position(|p| !p.is_finite()) {
                return Err(ConfigError::NonFinite {
                    field: format!("likelihood {} of fact {}", i, f.name),
                });
            }
        }

        Ok(Self { hypotheses, facts })
    }

    /// Parse a document in the given format.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Yaml => Self::parse_yaml(text),
            ConfigFormat::Json => Self::parse_json(text),
        }
    }

    /// Parse a YAML document.
    pub fn parse_yaml(text: &str) -> Result<Self, ConfigError> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)
            .map_err(|e| ConfigError::Parse(format!("invalid YAML: {}", e)))?;
        let mapping = value.as_mapping().ok_or(ConfigError::NotAMapping)?;
        for (key, _) in mapping.iter() {
            match key.as_str() {
                Some(k) => check_top_level_key(k)?,
                None => return Err(ConfigError::UnknownKey(format!("{:?}", key))),
            }
        }
        let raw: RawDocument = serde_yaml::from_value(value)
            .map_err(|e| ConfigError::Parse(format!("invalid YAML: {}", e)))?;
        Self::try_from(raw)
    }

    /// Parse a JSON document.
    pub fn parse_json(text: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| ConfigError::Parse(format!("invalid JSON: {}", e)))?;
        let object = value.as_object().ok_or(ConfigError::NotAMapping)?;
        for key in object.keys() {
            check_top_level_key(key)?;
        }
        let raw: RawDocument = serde_json::from_value(value)
            .map_err(|e| ConfigError::Parse(format!("invalid JSON: {}", e)))?;
        Self::try_from(raw)
    }

    /// Load a configuration file; the format follows the extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        crate::resolve::load_config(path).map(|loaded| loaded.config)
    }

    /// The embedded demonstration configuration.
    pub fn example() -> Result<Self, ConfigError> {
        Self::parse_yaml(EXAMPLE_YAML)
    }

    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn hypothesis(&self, index: usize) -> Option<&Hypothesis> {
        self.hypotheses.get(index)
    }

    pub fn fact(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    pub fn hypothesis_count(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    pub fn hypothesis_names(&self) -> Vec<&str> {
        self.hypotheses.iter().map(|h| h.name.as_str()).collect()
    }

    /// Priors in hypothesis order.
    pub fn prior_vector(&self) -> Vec<f64> {
        self.hypotheses.iter().map(|h| h.prior).collect()
    }

    /// Check if priors sum to 1.0 (within tolerance).
    pub fn priors_sum_to_one(&self, tolerance: f64) -> bool {
        let sum: f64 = self.hypotheses.iter().map(|h| h.prior).sum();
        (sum - 1.0).abs() < tolerance
    }
}

fn check_top_level_key(key: &str) -> Result<(), ConfigError> {
    if key == HYPOTHESES_KEY || key == FACTS_KEY {
        Ok(())
    } else {
        Err(ConfigError::UnknownKey(key.to_string()))
    }
}

impl TryFrom<RawDocument> for Configuration {
    type Error = ConfigError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        Configuration::new(
            raw.hypotheses.unwrap_or_default(),
            raw.facts.unwrap_or_default(),
        )
    }
}

impl From<Configuration> for RawDocument {
    fn from(config: Configuration) -> Self {
        RawDocument {
            hypotheses: Some(config.hypotheses),
            facts: Some(config.facts),
        }
    }
}
