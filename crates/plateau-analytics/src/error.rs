//! Error types for the plateau-analytics crate.
//!
//! The public statistics never fail their caller: degenerate input maps to a
//! neutral default and unexpected arithmetic failures are absorbed at the
//! function boundary. The error type here exists for the internal checked
//! computation paths only.

/// Errors that can occur inside a statistic's checked computation path.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// An arithmetic operation overflowed or was otherwise undefined.
    #[error("arithmetic overflow in {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: &'static str,
    },
}

/// Shorthand constructor used by the checked computation paths.
pub(crate) const fn overflow(context: &'static str) -> AnalyticsError {
    AnalyticsError::ArithmeticOverflow { context }
}
