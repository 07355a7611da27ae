//! Weighted sums and normalization, in linear and log domain.
//!
//! These are the building blocks of marginal and posterior computation.
//! Both normalizers refuse a zero or non-finite total instead of returning
//! NaN, so degenerate evidence is reported rather than hidden.

use thiserror::Error;

/// Errors raised while normalizing a weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NormalizeError {
    #[error("weights sum to zero")]
    ZeroMass,
    #[error("weights sum to a non-finite value ({0})")]
    NonFinite(f64),
    #[error("no weights to normalize")]
    Empty,
}

/// Σ wᵢ·vᵢ, accumulated in index order.
///
/// Returns `None` when the slices differ in length.
pub fn weighted_sum(weights: &[f64], values: &[f64]) -> Option<f64> {
    if weights.len() != values.len() {
        return None;
    }
    Some(weights.iter().zip(values).map(|(w, v)| w * v).sum())
}

/// Divide every weight by their sum.
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>, NormalizeError> {
    if weights.is_empty() {
        return Err(NormalizeError::Empty);
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        return Err(NormalizeError::NonFinite(total));
    }
    if total == 0.0 {
        return Err(NormalizeError::ZeroMass);
    }
    Ok(weights.iter().map(|w| w / total).collect())
}

/// Normalize log-weights into linear probabilities.
///
/// Weights are shifted by their maximum before exponentiating, so long
/// products of small factors do not underflow. `-inf` is an exact zero;
/// only an all `-inf` input is [`NormalizeError::ZeroMass`].
pub fn normalize_log(log_weights: &[f64]) -> Result<Vec<f64>, NormalizeError> {
    if log_weights.is_empty() {
        return Err(NormalizeError::Empty);
    }
    if let Some(&bad) = log_weights.iter().find(|v| v.is_nan() || **v == f64::INFINITY) {
        return Err(NormalizeError::NonFinite(bad));
    }
    let max = log_weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return Err(NormalizeError::ZeroMass);
    }
    let shifted: Vec<f64> = log_weights.iter().map(|v| (v - max).exp()).collect();
    normalize(&shifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn weighted_sum_basic() {
        let s = weighted_sum(&[0.5, 0.5], &[0.8, 0.2]).unwrap();
        assert!(approx_eq(s, 0.5, 1e-12));
    }

    #[test]
    fn weighted_sum_length_mismatch() {
        assert!(weighted_sum(&[0.5, 0.5], &[0.8]).is_none());
    }

    #[test]
    fn normalize_basic() {
        let out = normalize(&[0.32, 0.02]).unwrap();
        assert!(approx_eq(out[0], 0.32 / 0.34, 1e-12));
        assert!(approx_eq(out[1], 0.02 / 0.34, 1e-12));
    }

    #[test]
    fn normalize_zero_mass() {
        assert_eq!(normalize(&[0.0, 0.0]), Err(NormalizeError::ZeroMass));
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(&[]), Err(NormalizeError::Empty));
    }

    #[test]
    fn normalize_non_finite() {
        assert!(matches!(
            normalize(&[f64::INFINITY, 1.0]),
            Err(NormalizeError::NonFinite(_))
        ));
        assert!(matches!(
            normalize(&[f64::NAN, 1.0]),
            Err(NormalizeError::NonFinite(_))
        ));
    }

    #[test]
    fn normalize_log_matches_linear() {
        let out = normalize_log(&[0.32f64.ln(), 0.02f64.ln()]).unwrap();
        assert!(approx_eq(out[0], 0.32 / 0.34, 1e-12));
        assert!(approx_eq(out[1], 0.02 / 0.34, 1e-12));
    }

    #[test]
    fn normalize_log_equal_weights_are_exact() {
        assert_eq!(normalize_log(&[-3.0, -3.0]).unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn normalize_log_survives_underflow() {
        // 0.5 * 0.01^200 and 0.5 * 0.001^200 are both 0.0 in linear space.
        let a = 0.5f64.ln() + 200.0 * 0.01f64.ln();
        let b = 0.5f64.ln() + 200.0 * 0.001f64.ln();
        assert_eq!(normalize(&[a.exp(), b.exp()]), Err(NormalizeError::ZeroMass));
        let out = normalize_log(&[a, b]).unwrap();
        assert!(approx_eq(out[0], 1.0, 1e-12));
        assert!(out[1] >= 0.0 && out[1] < 1e-12);
    }

    #[test]
    fn normalize_log_zero_entries() {
        let out = normalize_log(&[f64::NEG_INFINITY, 0.0]).unwrap();
        assert_eq!(out, vec![0.0, 1.0]);
        assert_eq!(
            normalize_log(&[f64::NEG_INFINITY, f64::NEG_INFINITY]),
            Err(NormalizeError::ZeroMass)
        );
        assert_eq!(normalize_log(&[]), Err(NormalizeError::Empty));
    }

    #[test]
    fn normalize_log_rejects_nan_and_positive_infinity() {
        assert!(matches!(
            normalize_log(&[f64::NAN, 0.0]),
            Err(NormalizeError::NonFinite(_))
        ));
        assert!(matches!(
            normalize_log(&[f64::INFINITY, 0.0]),
            Err(NormalizeError::NonFinite(_))
        ));
    }

    proptest! {
        #[test]
        fn normalized_weights_sum_to_one(ws in proptest::collection::vec(0.001f64..10.0, 1..12)) {
            let out = normalize(&ws).unwrap();
            prop_assert!(approx_eq(out.iter().sum(), 1.0, 1e-9));
        }

        #[test]
        fn normalize_log_is_shift_invariant(
            lw in proptest::collection::vec(-50.0f64..0.0, 1..12),
            shift in -500.0f64..500.0,
        ) {
            let shifted: Vec<f64> = lw.iter().map(|v| v + shift).collect();
            let a = normalize_log(&lw).unwrap();
            let b = normalize_log(&shifted).unwrap();
            for (x, y) in a.iter().zip(b.iter()) {
                prop_assert!(approx_eq(*x, *y, 1e-9));
            }
        }

        #[test]
        fn normalize_is_scale_invariant(
            ws in proptest::collection::vec(0.001f64..10.0, 1..12),
            k in 0.01f64..100.0,
        ) {
            let scaled: Vec<f64> = ws.iter().map(|w| w * k).collect();
            let a = normalize(&ws).unwrap();
            let b = normalize(&scaled).unwrap();
            for (x, y) in a.iter().zip(b.iter()) {
                prop_assert!(approx_eq(*x, *y, 1e-9));
            }
        }
    }
}
