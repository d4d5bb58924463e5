//! Error types for VaR estimation.

use thiserror::Error;

/// Errors that can occur during VaR estimation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VarError {
    /// Error from the core domain types.
    #[error("core error: {0}")]
    Core(#[from] tailrisk_core::TailRiskError),

    /// Error from the statistics kernel.
    #[error("math error: {0}")]
    Math(#[from] tailrisk_math::MathError),

    /// Not enough return observations for the requested method.
    #[error("insufficient data: need at least {required} returns, got {actual}")]
    InsufficientData {
        /// Minimum required returns.
        required: usize,
        /// Actual number of returns.
        actual: usize,
    },
}
