//! Shared type definitions for the Plateau wealth analytics.
//!
//! This crate is the single source of truth for the types exchanged between
//! the analytics core and its consumers. Types defined here flow downstream
//! to `TypeScript` via `ts-rs` for the chart dashboard.
//!
//! # Modules
//!
//! - [`records`] -- Input and per-record projection types
//! - [`metrics`] -- Aggregate metrics bundle and the processed-dataset result

pub mod metrics;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use metrics::{MetricsBundle, PalmaRatio, ProcessedDataset};
pub use records::{ProjectedPoint, WealthRecord};
