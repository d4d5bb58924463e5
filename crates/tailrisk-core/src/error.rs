//! Error types for the Tailrisk core library.
//!
//! This module defines the error taxonomy shared by the domain types:
//! invalid prices, ordering violations, insufficient observations, and
//! invalid confidence levels. All failures are synchronous and carry no
//! partial results.

use thiserror::Error;

/// A specialized Result type for Tailrisk core operations.
pub type TailRiskResult<T> = Result<T, TailRiskError>;

/// The main error type for Tailrisk core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TailRiskError {
    /// A price observation is non-positive or non-finite.
    ///
    /// Raised at series construction, before any return is computed, so a
    /// bad observation can never silently corrupt the temporal alignment of
    /// a derived return series.
    #[error("Invalid price at index {index}: {value}")]
    InvalidPrice {
        /// Position of the offending observation in the input.
        index: usize,
        /// The invalid price value.
        value: f64,
    },

    /// Observations are not in strictly ascending date order.
    #[error("Out-of-order observation at index {index}: dates must be strictly ascending")]
    UnorderedObservations {
        /// Position of the first observation that breaks the order.
        index: usize,
    },

    /// Not enough observations for the requested computation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level: {value} (must be strictly between 0 and 1)")]
    InvalidConfidenceLevel {
        /// The invalid confidence level.
        value: f64,
    },

    /// A return value is non-finite (NaN or infinite).
    #[error("Invalid return at index {index}: {value}")]
    InvalidReturn {
        /// Position of the offending return.
        index: usize,
        /// The invalid return value.
        value: f64,
    },
}

impl TailRiskError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(index: usize, value: f64) -> Self {
        Self::InvalidPrice { index, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TailRiskError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));

        let err = TailRiskError::InvalidConfidenceLevel { value: 1.5 };
        assert!(err.to_string().contains("1.5"));
    }
}
