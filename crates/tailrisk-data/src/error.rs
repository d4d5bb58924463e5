//! Error types for price data loading.

use thiserror::Error;

/// A specialized Result type for data loading.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading price data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// A row could not be parsed into a price record.
    #[error("parse error: {0}")]
    Parse(String),

    /// The parsed rows do not form a valid price series.
    #[error("invalid price series: {0}")]
    Series(#[from] tailrisk_core::TailRiskError),
}
