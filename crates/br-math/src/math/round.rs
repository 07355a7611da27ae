//! Fixed-precision rounding.
//!
//! Results are rounded once, where they are produced, so repeated display
//! never drifts.

use serde::{Deserialize, Serialize};

/// Largest digit count that still round-trips through `10^digits` exactly.
pub const MAX_DIGITS: u32 = 15;

/// Round `value` to `digits` decimal places, ties to even.
///
/// Non-finite values pass through unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits.min(MAX_DIGITS) as i32);
    let rounded = (value * scale).round_ties_even() / scale;
    // Keep -0.0 out of reports.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Number of decimal digits kept in a reported probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precision(u32);

impl Precision {
    /// Five digits, the precision of marginals and single-fact posteriors.
    pub const DEFAULT: Precision = Precision(5);

    /// Clamp to [`MAX_DIGITS`].
    pub fn new(digits: u32) -> Self {
        Precision(digits.min(MAX_DIGITS))
    }

    pub fn digits(self) -> u32 {
        self.0
    }

    pub fn apply(self, value: f64) -> f64 {
        round_to(value, self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Precision::new(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounds_to_five_digits() {
        assert_eq!(round_to(0.123456789, 5), 0.12346);
        assert_eq!(round_to(0.5, 5), 0.5);
    }

    #[test]
    fn zero_digits_is_integer_rounding() {
        assert_eq!(round_to(0.941, 0), 1.0);
        assert_eq!(round_to(0.059, 0), 0.0);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(0.75, 1), 0.8);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let r = round_to(-0.000001, 3);
        assert!(r == 0.0 && r.is_sign_positive());
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to(f64::NAN, 5).is_nan());
        assert_eq!(round_to(f64::INFINITY, 5), f64::INFINITY);
    }

    #[test]
    fn precision_clamps_digits() {
        assert_eq!(Precision::new(40).digits(), MAX_DIGITS);
        assert_eq!(Precision::default().digits(), 5);
    }

    #[test]
    fn precision_apply_matches_round_to() {
        let p = Precision::new(3);
        assert_eq!(p.apply(0.94117647), 0.941);
    }

    proptest! {
        #[test]
        fn rounding_error_is_bounded(x in 0.0f64..=1.0, digits in 0u32..=10) {
            let r = round_to(x, digits);
            let half_ulp = 0.5 * 10f64.powi(-(digits as i32));
            prop_assert!((r - x).abs() <= half_ulp + 1e-12);
        }

        #[test]
        fn rounding_is_idempotent(x in 0.0f64..=1.0, digits in 0u32..=10) {
            let once = round_to(x, digits);
            prop_assert_eq!(round_to(once, digits), once);
        }
    }
}
