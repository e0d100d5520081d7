//! Input records and per-record projections.
//!
//! A dataset is a flat collection of [`WealthRecord`] values -- one per
//! individual (or percentile bucket). Processing projects each record into a
//! [`ProjectedPoint`] carrying the normalized utility score for the chart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// WealthRecord
// ---------------------------------------------------------------------------

/// A single input entity: one individual's (or percentile bucket's) net
/// wealth.
///
/// Wealth is assumed non-negative. Input order is irrelevant to the
/// statistics themselves, but the per-record projection and the threshold
/// index preserve it, so callers should keep their collections in display
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WealthRecord {
    /// Net wealth of this individual, in base currency units.
    #[ts(as = "String")]
    pub wealth: Decimal,
}

impl WealthRecord {
    /// Create a record from a wealth value.
    pub const fn new(wealth: Decimal) -> Self {
        Self { wealth }
    }
}

// ---------------------------------------------------------------------------
// ProjectedPoint
// ---------------------------------------------------------------------------

/// Per-record projection derived from a [`WealthRecord`] and a threshold.
///
/// Created fresh on every processing call and owned solely by the caller.
/// A point has no identity beyond its position, which matches the position
/// of the source record in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProjectedPoint {
    /// The source record's wealth, unchanged.
    #[ts(as = "String")]
    pub wealth: Decimal,
    /// Normalized utility in the range 0.0 to 1.0, anchored at the plateau
    /// threshold. The dashboard multiplies by 100 for display.
    #[ts(as = "String")]
    pub utility: Decimal,
    /// Restates `wealth` unchanged. Reserved for future percentile-rank
    /// semantics; consumers must not assume it will stay an identity copy.
    #[ts(as = "String")]
    pub wealth_pct: Decimal,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
