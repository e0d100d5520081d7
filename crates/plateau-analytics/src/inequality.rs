//! Inequality measures: Gini coefficient and Palma ratio.
//!
//! Both statistics sort a private copy of the input ascending; the caller's
//! collection is never reordered. Wealth is assumed non-negative -- behavior
//! on negative inputs is unspecified.

use rust_decimal::Decimal;
use tracing::warn;

use plateau_types::PalmaRatio;

use crate::error::{AnalyticsError, overflow};

/// Numerator factor for the bottom share: the lowest `2n / 5` values
/// (exactly `floor(0.4 * n)`).
const BOTTOM_SHARE_NUMERATOR: usize = 2;
/// Denominator for the bottom share count.
const BOTTOM_SHARE_DENOMINATOR: usize = 5;
/// Divisor for the top share count: the highest `n / 10` values
/// (exactly `floor(0.1 * n)`).
const TOP_SHARE_DIVISOR: usize = 10;

// ---------------------------------------------------------------------------
// Gini coefficient
// ---------------------------------------------------------------------------

/// Gini coefficient of `values`, in `[0, 1]` for non-negative inputs.
///
/// Zero for an empty collection, a zero total, a single element, or any
/// constant distribution. Never fails the caller: an arithmetic failure is
/// logged and absorbed, and zero is returned instead.
pub fn gini(values: &[Decimal]) -> Decimal {
    match gini_checked(values) {
        Ok(coefficient) => coefficient,
        Err(err) => {
            warn!(error = %err, "gini computation failed, reporting zero");
            Decimal::ZERO
        }
    }
}

/// The checked computation behind [`gini`].
///
/// Uses the sorted rank formula:
///
/// ```text
/// G = sum over i of (2i - n - 1) * value[i]  /  (n * total)
/// ```
///
/// with 1-indexed ranks over the ascending sort. This is the `O(n log n)`
/// equivalent of the pairwise mean-absolute-difference form.
fn gini_checked(values: &[Decimal]) -> Result<Decimal, AnalyticsError> {
    if values.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let total = checked_sum(&sorted)?;
    if total == Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let count = Decimal::from(sorted.len());
    let mut weighted = Decimal::ZERO;

    for (rank, value) in (1_u64..).zip(sorted.iter()) {
        let coefficient = Decimal::from(rank)
            .checked_mul(Decimal::TWO)
            .and_then(|doubled| doubled.checked_sub(count))
            .and_then(|shifted| shifted.checked_sub(Decimal::ONE))
            .ok_or_else(|| overflow("gini rank coefficient"))?;
        weighted = coefficient
            .checked_mul(*value)
            .and_then(|term| weighted.checked_add(term))
            .ok_or_else(|| overflow("gini weighted accumulation"))?;
    }

    let denominator = count
        .checked_mul(total)
        .ok_or_else(|| overflow("gini denominator"))?;

    weighted
        .checked_div(denominator)
        .ok_or_else(|| overflow("gini coefficient division"))
}

// ---------------------------------------------------------------------------
// Palma ratio
// ---------------------------------------------------------------------------

/// Palma ratio of `values`: top-10% wealth share over bottom-40% share.
///
/// `Defined(0)` for an empty collection or a zero total. `Undefined` when
/// the bottom-40% share is exactly zero while total wealth is nonzero --
/// including small collections where `floor(0.4 * n)` is zero, which is
/// accepted behavior rather than an error. Never fails the caller: an
/// arithmetic failure is logged and absorbed, and `Defined(0)` is returned
/// instead.
pub fn palma(values: &[Decimal]) -> PalmaRatio {
    match palma_checked(values) {
        Ok(ratio) => ratio,
        Err(err) => {
            warn!(error = %err, "palma computation failed, reporting zero");
            PalmaRatio::Defined(Decimal::ZERO)
        }
    }
}

/// The checked computation behind [`palma`].
fn palma_checked(values: &[Decimal]) -> Result<PalmaRatio, AnalyticsError> {
    if values.is_empty() {
        return Ok(PalmaRatio::Defined(Decimal::ZERO));
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let total = checked_sum(&sorted)?;
    if total == Decimal::ZERO {
        return Ok(PalmaRatio::Defined(Decimal::ZERO));
    }

    let bottom_count = sorted
        .len()
        .checked_mul(BOTTOM_SHARE_NUMERATOR)
        .and_then(|doubled| doubled.checked_div(BOTTOM_SHARE_DENOMINATOR))
        .ok_or_else(|| overflow("palma bottom count"))?;
    let top_count = sorted
        .len()
        .checked_div(TOP_SHARE_DIVISOR)
        .ok_or_else(|| overflow("palma top count"))?;

    let bottom_sum = checked_sum(sorted.iter().take(bottom_count))?;
    let top_sum = checked_sum(sorted.iter().rev().take(top_count))?;

    let bottom_share = bottom_sum
        .checked_div(total)
        .ok_or_else(|| overflow("palma bottom share"))?;
    let top_share = top_sum
        .checked_div(total)
        .ok_or_else(|| overflow("palma top share"))?;

    if bottom_share == Decimal::ZERO {
        return Ok(PalmaRatio::Undefined);
    }

    top_share
        .checked_div(bottom_share)
        .map(PalmaRatio::Defined)
        .ok_or_else(|| overflow("palma ratio division"))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Sum a sequence of values with overflow checking.
fn checked_sum<'a, I>(values: I) -> Result<Decimal, AnalyticsError>
where
    I: IntoIterator<Item = &'a Decimal>,
{
    let mut total = Decimal::ZERO;
    for value in values {
        total = total
            .checked_add(*value)
            .ok_or_else(|| overflow("wealth total accumulation"))?;
    }
    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
