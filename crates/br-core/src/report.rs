//! Report assembly and rendering.
//!
//! The engine never formats numbers; this module turns its results into the
//! text sections of an interactive session or into a JSON document.

use std::fmt::Write as _;

use br_common::{OutputFormat, SCHEMA_VERSION};
use br_config::{ConfigSnapshot, Configuration, ValidationWarning};
use serde::Serialize;

use crate::inference::{Marginals, SinglePosterior};
use crate::session::JointQuery;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorRow {
    pub hypothesis: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ConfigSnapshot>,
    pub warnings: Vec<ValidationWarning>,
    pub priors: Vec<PriorRow>,
    pub marginals: Marginals,
    pub posteriors: Vec<SinglePosterior>,
    pub joint: Vec<JointQuery>,
}

impl Report {
    pub fn new(config: &Configuration, marginals: Marginals, posteriors: Vec<SinglePosterior>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            source: None,
            warnings: Vec::new(),
            priors: config
                .hypotheses()
                .iter()
                .map(|h| PriorRow {
                    hypothesis: h.name.clone(),
                    probability: h.prior,
                })
                .collect(),
            marginals,
            posteriors,
            joint: Vec::new(),
        }
    }

    pub fn with_source(mut self, snapshot: ConfigSnapshot) -> Self {
        self.source = Some(snapshot);
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<ValidationWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_joint(mut self, joint: Vec<JointQuery>) -> Self {
        self.joint = joint;
        self
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, br_common::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_text(&self) -> String {
        // Writing into a String cannot fail.
        let mut out = String::new();

        if let Some(source) = &self.source {
            let _ = writeln!(out, "Configuration: {} (sha256 {})", source.source, source.sha256);
            let _ = writeln!(out);
        }
        for w in &self.warnings {
            let _ = writeln!(out, "warning: {}", w.message);
        }
        if !self.warnings.is_empty() {
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Hypothesis: Probability a priori P(h)");
        let _ = writeln!(out, "HYPOTHESIS, PROBABILITY");
        for row in &self.priors {
            let _ = writeln!(out, "{}, {}", row.hypothesis, row.probability);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Probability of facts P(F)");
        let _ = writeln!(out, "FACT, PROBABILITY");
        for m in self.marginals.iter() {
            let _ = writeln!(out, "{}, {}", m.fact, m.probability);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Hypothesis: Probability a posteriori P(h|F)");
        let _ = writeln!(out, "FACT, HYPOTHESIS, PROBABILITY");
        for p in &self.posteriors {
            let _ = writeln!(out, "{}, {}, {}", p.fact, p.hypothesis, p.probability);
        }

        for q in &self.joint {
            let _ = writeln!(out);
            let _ = writeln!(out, "Probability of several chosen facts P(h|F1..Fk) [{}]", q.id);
            let _ = writeln!(out, "HYPOTHESIS, FACTS [FACT1, FACT2, ...], PROBABILITY");
            for p in &q.posteriors {
                let _ = writeln!(
                    out,
                    "{}, [{}], {}",
                    p.hypothesis,
                    p.facts.join(", "),
                    p.probability
                );
            }
        }

        out
    }
}
