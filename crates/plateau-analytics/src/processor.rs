//! Orchestration: one dataset, one threshold, one result bundle.
//!
//! [`process`] is the single entry point the dashboard calls on every
//! threshold change. It projects each record through the utility transform
//! and assembles the aggregate metrics from the four leaf statistics. Each
//! sub-computation sorts its own private copy, so the caller's collection is
//! never reordered.

use rust_decimal::Decimal;
use tracing::debug;

use plateau_types::{MetricsBundle, ProcessedDataset, ProjectedPoint, WealthRecord};

use crate::excess::excess_wealth;
use crate::inequality::{gini, palma};
use crate::utility::utility;

/// Process a dataset at a threshold into per-record projections and an
/// aggregate metrics bundle.
///
/// Projections are emitted in the input's original order; `wealth_pct` is a
/// direct copy of `wealth` (reserved for future percentile semantics). The
/// threshold index is the first original-order position whose wealth meets
/// or exceeds the threshold, or `-1` if none qualifies.
///
/// Performs no validation of its own and never fails: degenerate inputs are
/// absorbed by the leaf statistics.
pub fn process(data: &[WealthRecord], threshold: Decimal) -> ProcessedDataset {
    if data.is_empty() {
        debug!("processing empty dataset, all metrics degenerate");
    }

    let points: Vec<ProjectedPoint> = data
        .iter()
        .map(|record| ProjectedPoint {
            wealth: record.wealth,
            utility: utility(record.wealth, threshold),
            wealth_pct: record.wealth,
        })
        .collect();

    let values: Vec<Decimal> = data.iter().map(|record| record.wealth).collect();

    let threshold_index = data
        .iter()
        .position(|record| record.wealth >= threshold)
        // A usize index always fits in i64 on supported targets.
        .map_or(-1, |index| i64::try_from(index).unwrap_or(i64::MAX));

    let metrics = MetricsBundle {
        excess: excess_wealth(data, threshold),
        gini: gini(&values),
        palma: palma(&values),
        total_data_points: data.len(),
        threshold_index,
    };

    ProcessedDataset {
        data: points,
        metrics,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
