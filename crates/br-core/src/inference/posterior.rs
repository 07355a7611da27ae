//! Posterior computation P(h|F) for single facts and for conjunctions of
//! conditionally independent facts.

use br_config::{Configuration, Fact};
use br_math::{normalize_log, NormalizeError, Precision};
use serde::Serialize;
use tracing::debug;

use super::error::{IndexKind, InferenceError};
use super::marginal::Marginals;

/// P(hypothesis | fact) for one (fact, hypothesis) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SinglePosterior {
    pub fact: String,
    pub hypothesis: String,
    pub probability: f64,
}

/// P(hypothesis | F₁, …, Fₖ) for one hypothesis and one fact selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointPosterior {
    pub hypothesis: String,
    pub facts: Vec<String>,
    pub probability: f64,
}

/// Compute P(hᵢ|F) = P(F|hᵢ)·P(hᵢ) / P(F) for every fact and hypothesis.
///
/// Results are fact-major, hypothesis-minor, rounded to five digits. A fact
/// that is impossible under every hypothesis fails the whole computation;
/// no partial list is returned. Each row is normalized the same way as a
/// one-fact joint query, so both paths report identical values.
pub fn compute_single_posteriors(
    config: &Configuration,
    marginals: &Marginals,
) -> Result<Vec<SinglePosterior>, InferenceError> {
    if marginals.len() != config.fact_count() {
        return Err(InferenceError::MarginalsMismatch {
            expected: config.fact_count(),
            actual: marginals.len(),
        });
    }

    let mut out = Vec::with_capacity(config.fact_count() * config.hypothesis_count());
    for fact in config.facts() {
        let posteriors = posterior_row(config, &[fact], || {
            format!(
                "fact {} has zero probability under every hypothesis",
                fact.name
            )
        })?;
        for (hypothesis, p) in config.hypotheses().iter().zip(posteriors) {
            out.push(SinglePosterior {
                fact: fact.name.clone(),
                hypothesis: hypothesis.name.clone(),
                probability: Precision::DEFAULT.apply(p),
            });
        }
    }
    Ok(out)
}

/// Resolve fact indices to facts, preserving order and duplicates.
///
/// Every index is checked before anything is returned.
pub fn select_facts<'a>(
    config: &'a Configuration,
    indices: &[usize],
) -> Result<Vec<&'a Fact>, InferenceError> {
    if indices.is_empty() {
        return Err(InferenceError::EmptySelection);
    }
    indices
        .iter()
        .map(|&index| {
            config.fact(index).ok_or(InferenceError::IndexOutOfRange {
                kind: IndexKind::Fact,
                index,
                len: config.fact_count(),
            })
        })
        .collect()
}

/// Naive-Bayes combination over the selected facts:
///
/// ```text
/// numeratorᵢ = P(hᵢ) · Πⱼ P(Fⱼ|hᵢ)
/// P(hᵢ|F₁..Fₖ) = numeratorᵢ / Σᵢ numeratorᵢ
/// ```
///
/// Independence is assumed, never checked. Numerators are accumulated as
/// log weights, so a long selection of small likelihoods does not underflow
/// to a false zero. Only the final value is rounded to `precision`.
pub fn compute_joint_posterior(
    config: &Configuration,
    indices: &[usize],
    precision: Precision,
) -> Result<Vec<JointPosterior>, InferenceError> {
    let facts = select_facts(config, indices)?;
    let names: Vec<String> = facts.iter().map(|f| f.name.clone()).collect();

    let posteriors = posterior_row(config, &facts, || {
        format!(
            "facts [{}] have zero joint probability under every hypothesis",
            names.join(", ")
        )
    })?;

    Ok(config
        .hypotheses()
        .iter()
        .zip(posteriors)
        .map(|(h, p)| JointPosterior {
            hypothesis: h.name.clone(),
            facts: names.clone(),
            probability: precision.apply(p),
        })
        .collect())
}

/// Normalized P(hᵢ | facts) for every hypothesis, at full precision.
///
/// Each numerator is `ln P(hᵢ) + Σⱼ ln P(Fⱼ|hᵢ)`. A zero prior or likelihood
/// makes that hypothesis exactly zero; only when every hypothesis is zero is
/// the row a division by zero, described by `zero_context`.
fn posterior_row<C>(
    config: &Configuration,
    facts: &[&Fact],
    zero_context: C,
) -> Result<Vec<f64>, InferenceError>
where
    C: FnOnce() -> String,
{
    let mut log_weights = Vec::with_capacity(config.hypothesis_count());
    for (i, h) in config.hypotheses().iter().enumerate() {
        let mut acc = log_probability(h.prior, &h.name)?;
        for fact in facts {
            let likelihood = fact
                .likelihood(i)
                .ok_or_else(|| InferenceError::LikelihoodLength {
                    fact: fact.name.clone(),
                    expected: config.hypothesis_count(),
                    actual: fact.likelihoods.len(),
                })?;
            acc += log_probability(likelihood, &fact.name)?;
        }
        log_weights.push(acc);
    }

    debug!(?log_weights, "posterior log weights");

    normalize_log(&log_weights).map_err(|e| match e {
        NormalizeError::ZeroMass | NormalizeError::Empty => InferenceError::DivisionByZero {
            context: zero_context(),
        },
        NormalizeError::NonFinite(v) => {
            InferenceError::NumericalInstability(format!("log weight {} in posterior row", v))
        }
    })
}

fn log_probability(value: f64, owner: &str) -> Result<f64, InferenceError> {
    if value < 0.0 {
        return Err(InferenceError::NumericalInstability(format!(
            "negative probability {} in {}",
            value, owner
        )));
    }
    Ok(value.ln())
}
