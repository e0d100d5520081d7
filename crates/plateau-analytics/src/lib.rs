//! Distributional statistics over individual wealth values for the Plateau
//! dashboard.
//!
//! Five pure, stateless functions form the analytics core: the redistributable
//! excess above an adjustable plateau threshold, a logarithmic utility
//! transform anchored at that threshold, the Gini coefficient, the Palma
//! ratio, and an orchestrator that combines them into one result bundle per
//! dataset and threshold.
//!
//! # Architecture
//!
//! The crate is a **passive analysis layer**: every function is a synchronous,
//! idempotent transform of its arguments to a fresh result, safe to call
//! repeatedly as the threshold slider moves and from multiple threads without
//! coordination. Sorting inside the inequality measures operates on private
//! copies; the caller's collection is never reordered.
//!
//! Degenerate input (empty datasets, non-positive values, zero totals) is
//! never an error -- each statistic returns its neutral default silently, and
//! internal arithmetic failures are absorbed at the function boundary so that
//! no call can ever fail the dashboard's render loop. All arithmetic uses
//! checked [`rust_decimal::Decimal`] operations.
//!
//! # Modules
//!
//! - [`excess`] -- Excess wealth above the threshold, in trillions
//! - [`utility`] -- Normalized log-utility in `[0, 1]`
//! - [`inequality`] -- Gini coefficient and Palma ratio
//! - [`processor`] -- Orchestration into a [`plateau_types::ProcessedDataset`]
//! - [`error`] -- Internal error type for the checked computation paths
//!
//! # Usage
//!
//! ```
//! use plateau_analytics::process;
//! use plateau_types::WealthRecord;
//! use rust_decimal::Decimal;
//!
//! let data: Vec<WealthRecord> = [50_000, 200_000, 5_000_000]
//!     .into_iter()
//!     .map(|wealth| WealthRecord::new(Decimal::from(wealth)))
//!     .collect();
//!
//! let result = process(&data, Decimal::from(200_000));
//! assert_eq!(result.metrics.total_data_points, 3);
//! assert_eq!(result.metrics.threshold_index, 1);
//! ```

pub mod error;
pub mod excess;
pub mod inequality;
pub mod processor;
pub mod utility;

// Re-export primary operations at crate root.
pub use error::AnalyticsError;
pub use excess::excess_wealth;
pub use inequality::{gini, palma};
pub use processor::process;
pub use utility::utility;
