//! Excess wealth above the plateau threshold.
//!
//! "Excess" is the total amount by which individual wealth values exceed the
//! threshold, summed over the records strictly above it and reported in
//! trillions of base currency units. The trillions scale is part of the
//! dashboard interface and must not change.

use rust_decimal::Decimal;
use tracing::warn;

use plateau_types::WealthRecord;

use crate::error::{AnalyticsError, overflow};

/// Scale divisor for reporting excess wealth in trillions.
fn excess_scale() -> Decimal {
    Decimal::from(1_000_000_000_000_u64)
}

/// Sum of per-record wealth strictly above `threshold`, in trillions.
///
/// Returns zero for an empty dataset or a non-positive threshold, and zero
/// when no record exceeds the threshold. The result is always non-negative,
/// non-increasing in the threshold, and non-decreasing in any record's
/// wealth.
///
/// This function never fails the caller: an arithmetic failure inside the
/// computation is logged and absorbed, and zero is returned instead.
pub fn excess_wealth(data: &[WealthRecord], threshold: Decimal) -> Decimal {
    if data.is_empty() || threshold <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match excess_wealth_checked(data, threshold) {
        Ok(excess) => excess,
        Err(err) => {
            warn!(error = %err, "excess wealth computation failed, reporting zero");
            Decimal::ZERO
        }
    }
}

/// The checked computation behind [`excess_wealth`].
fn excess_wealth_checked(
    data: &[WealthRecord],
    threshold: Decimal,
) -> Result<Decimal, AnalyticsError> {
    let mut surplus = Decimal::ZERO;

    for record in data {
        if record.wealth > threshold {
            let over = record
                .wealth
                .checked_sub(threshold)
                .ok_or_else(|| overflow("excess surplus subtraction"))?;
            surplus = surplus
                .checked_add(over)
                .ok_or_else(|| overflow("excess surplus accumulation"))?;
        }
    }

    surplus
        .checked_div(excess_scale())
        .ok_or_else(|| overflow("excess trillions scaling"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn records(wealths: &[i64]) -> Vec<WealthRecord> {
        wealths
            .iter()
            .map(|w| WealthRecord::new(Decimal::from(*w)))
            .collect()
    }

    #[test]
    fn empty_dataset_yields_zero() {
        assert_eq!(excess_wealth(&[], Decimal::from(100)), Decimal::ZERO);
    }

    #[test]
    fn non_positive_threshold_yields_zero() {
        let data = records(&[1_000_000]);
        assert_eq!(excess_wealth(&data, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(excess_wealth(&data, Decimal::from(-5)), Decimal::ZERO);
    }

    #[test]
    fn no_record_above_threshold_yields_zero() {
        // The comparison is strict: a record equal to the threshold
        // contributes nothing.
        let data = records(&[100, 200, 300]);
        assert_eq!(excess_wealth(&data, Decimal::from(300)), Decimal::ZERO);
    }

    #[test]
    fn concrete_scenario_in_trillions() {
        // Surpluses above 200000: 300000 + 800000 + 4800000 = 5900000,
        // then scaled by 1e12.
        let data = records(&[0, 50_000, 100_000, 200_000, 500_000, 1_000_000, 5_000_000]);
        let excess = excess_wealth(&data, Decimal::from(200_000));
        assert_eq!(excess, Decimal::new(59, 7));
    }

    #[test]
    fn single_record_above_threshold_is_positive() {
        let data = records(&[100, 5_000]);
        let excess = excess_wealth(&data, Decimal::from(1_000));
        assert!(excess > Decimal::ZERO);
        assert_eq!(excess, Decimal::from(4_000).checked_div(excess_scale()).unwrap_or_default());
    }

    #[test]
    fn non_increasing_in_threshold() {
        let data = records(&[10_000, 250_000, 900_000, 4_000_000]);
        let low = excess_wealth(&data, Decimal::from(100_000));
        let mid = excess_wealth(&data, Decimal::from(500_000));
        let high = excess_wealth(&data, Decimal::from(5_000_000));
        assert!(low >= mid);
        assert!(mid >= high);
        assert_eq!(high, Decimal::ZERO);
    }

    #[test]
    fn non_decreasing_in_record_wealth() {
        let threshold = Decimal::from(1_000);
        let poorer = records(&[2_000, 500]);
        let richer = records(&[3_000, 500]);
        assert!(excess_wealth(&richer, threshold) >= excess_wealth(&poorer, threshold));
    }
}
