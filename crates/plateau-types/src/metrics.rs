//! Aggregate metrics for a processed dataset.
//!
//! The metrics bundle is assembled once per processing call from four
//! independent statistics and is consumed as-is by the dashboard. Scale
//! conventions are part of the consumer-facing interface: excess wealth is
//! reported in trillions, and the threshold index keeps its `-1` sentinel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::records::ProjectedPoint;

// ---------------------------------------------------------------------------
// PalmaRatio
// ---------------------------------------------------------------------------

/// The Palma ratio: top-10% wealth share over bottom-40% wealth share.
///
/// The ratio is undefined when the bottom-40% share is exactly zero while
/// total wealth is nonzero. That case is modeled as an explicit variant
/// rather than an infinity sentinel, so comparisons and serialization stay
/// well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum PalmaRatio {
    /// A finite, non-negative ratio. Empty and all-zero datasets yield
    /// `Defined(0)`.
    Defined(#[ts(as = "String")] Decimal),
    /// Bottom-40% share is zero while total wealth is nonzero.
    Undefined,
}

impl PalmaRatio {
    /// Whether the ratio has a finite value.
    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// The finite value, if any.
    pub const fn value(self) -> Option<Decimal> {
        match self {
            Self::Defined(ratio) => Some(ratio),
            Self::Undefined => None,
        }
    }
}

// ---------------------------------------------------------------------------
// MetricsBundle
// ---------------------------------------------------------------------------

/// Aggregate statistics for one dataset at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MetricsBundle {
    /// Total wealth strictly above the threshold, in trillions of base
    /// currency units. Always non-negative.
    #[ts(as = "String")]
    pub excess: Decimal,
    /// Gini coefficient of the dataset (0.0 = perfect equality, 1.0 =
    /// maximum inequality). Zero for degenerate inputs.
    #[ts(as = "String")]
    pub gini: Decimal,
    /// Palma ratio of the dataset.
    pub palma: PalmaRatio,
    /// Number of records in the input.
    pub total_data_points: usize,
    /// Original-order index of the first record whose wealth meets or
    /// exceeds the threshold, or `-1` if none qualifies. The sentinel is
    /// part of the dashboard interface.
    pub threshold_index: i64,
}

// ---------------------------------------------------------------------------
// ProcessedDataset
// ---------------------------------------------------------------------------

/// The full result of one processing call: per-record projections in
/// original input order, plus the aggregate metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProcessedDataset {
    /// One projected point per input record, in input order.
    pub data: Vec<ProjectedPoint>,
    /// Aggregate statistics for the dataset at the given threshold.
    pub metrics: MetricsBundle,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palma_value_accessor() {
        let defined = PalmaRatio::Defined(Decimal::ONE);
        assert!(defined.is_defined());
        assert_eq!(defined.value(), Some(Decimal::ONE));

        let undefined = PalmaRatio::Undefined;
        assert!(!undefined.is_defined());
        assert_eq!(undefined.value(), None);
    }

    #[test]
    fn palma_roundtrip_serde() {
        let original = PalmaRatio::Defined(Decimal::new(15, 1));
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<PalmaRatio, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn palma_undefined_serializes_as_tag() {
        let json = serde_json::to_string(&PalmaRatio::Undefined).ok();
        assert_eq!(json.as_deref(), Some(r#""undefined""#));
    }

    #[test]
    fn metrics_roundtrip_serde() {
        let original = MetricsBundle {
            excess: Decimal::new(59, 7),
            gini: Decimal::new(267, 3),
            palma: PalmaRatio::Defined(Decimal::ONE),
            total_data_points: 7,
            threshold_index: 3,
        };
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<MetricsBundle, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn threshold_index_sentinel_survives_serde() {
        let original = MetricsBundle {
            excess: Decimal::ZERO,
            gini: Decimal::ZERO,
            palma: PalmaRatio::Defined(Decimal::ZERO),
            total_data_points: 0,
            threshold_index: -1,
        };
        let json = serde_json::to_value(&original).ok();
        let index = json
            .as_ref()
            .and_then(|v| v.get("threshold_index"))
            .and_then(serde_json::Value::as_i64);
        assert_eq!(index, Some(-1));
    }
}
