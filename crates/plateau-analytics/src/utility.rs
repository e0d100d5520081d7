//! Logarithmic utility scaling anchored at the plateau threshold.
//!
//! Marginal utility of wealth diminishes logarithmically up to the threshold
//! and is defined as zero additional value above it, so the score is capped
//! at one. The `ln(1 + x)` form keeps the transform defined and finite for
//! zero wealth and for arbitrarily small positive thresholds.

use rust_decimal::{Decimal, MathematicalOps};
use tracing::warn;

/// Normalized utility of `wealth` relative to `threshold`, in `[0, 1]`.
///
/// - `wealth <= 0` yields zero (no utility for non-positive wealth).
/// - `threshold <= 0` yields one (degenerate plateau: any non-negative
///   wealth is treated as already at the plateau).
/// - Otherwise `min(1, ln(1 + wealth) / ln(1 + threshold))`, which is
///   exactly one at `wealth == threshold` and capped at one above it.
///
/// Never fails the caller: an arithmetic failure is logged and absorbed,
/// and zero is returned instead.
pub fn utility(wealth: Decimal, threshold: Decimal) -> Decimal {
    if wealth <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if threshold <= Decimal::ZERO {
        return Decimal::ONE;
    }

    let ratio = log1p(wealth)
        .zip(log1p(threshold))
        .and_then(|(numerator, denominator)| numerator.checked_div(denominator));

    match ratio {
        Some(scaled) if scaled >= Decimal::ONE => Decimal::ONE,
        Some(scaled) => scaled,
        None => {
            warn!(%wealth, %threshold, "utility transform failed, reporting zero");
            Decimal::ZERO
        }
    }
}

/// `ln(1 + value)`, or `None` if the addition or logarithm is undefined.
fn log1p(value: Decimal) -> Option<Decimal> {
    Decimal::ONE.checked_add(value)?.checked_ln()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_wealth_yields_zero() {
        assert_eq!(utility(Decimal::ZERO, Decimal::from(1_000)), Decimal::ZERO);
        assert_eq!(utility(Decimal::from(-50), Decimal::from(1_000)), Decimal::ZERO);
    }

    #[test]
    fn non_positive_threshold_yields_one() {
        assert_eq!(utility(Decimal::from(500), Decimal::ZERO), Decimal::ONE);
        assert_eq!(utility(Decimal::from(500), Decimal::from(-10)), Decimal::ONE);
    }

    #[test]
    fn exactly_one_at_the_threshold() {
        let threshold = Decimal::from(200_000);
        assert_eq!(utility(threshold, threshold), Decimal::ONE);
    }

    #[test]
    fn capped_at_one_above_the_threshold() {
        let threshold = Decimal::from(200_000);
        assert_eq!(utility(Decimal::from(5_000_000), threshold), Decimal::ONE);
        assert_eq!(utility(Decimal::from(200_001), threshold), Decimal::ONE);
    }

    #[test]
    fn strictly_between_zero_and_one_below_the_threshold() {
        // ln(100001) / ln(200001): positive, and strictly less than one.
        let scaled = utility(Decimal::from(100_000), Decimal::from(200_000));
        assert!(scaled > Decimal::ZERO);
        assert!(scaled < Decimal::ONE);
    }

    #[test]
    fn bounded_over_a_wealth_sweep() {
        let threshold = Decimal::from(200_000);
        for wealth in [0_i64, 1, 50_000, 100_000, 200_000, 500_000, 5_000_000] {
            let scaled = utility(Decimal::from(wealth), threshold);
            assert!(scaled >= Decimal::ZERO);
            assert!(scaled <= Decimal::ONE);
        }
    }

    #[test]
    fn defined_for_tiny_positive_thresholds() {
        // ln(1 + t) stays positive for any positive t, so the ratio is
        // finite and the cap applies.
        let tiny = Decimal::new(1, 6);
        assert_eq!(utility(Decimal::from(100), tiny), Decimal::ONE);
    }

    #[test]
    fn monotone_in_wealth_below_the_plateau() {
        let threshold = Decimal::from(1_000_000);
        let lower = utility(Decimal::from(10_000), threshold);
        let higher = utility(Decimal::from(500_000), threshold);
        assert!(higher > lower);
    }
}
