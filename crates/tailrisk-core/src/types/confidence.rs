//! Confidence level type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TailRiskError, TailRiskResult};

/// A confidence level strictly between 0 and 1.
///
/// A confidence level of 0.95 means the reported VaR should not be exceeded
/// on 95% of days; the remaining 5% is the one-sided tail probability
/// exposed as [`alpha`](ConfidenceLevel::alpha).
///
/// # Example
///
/// ```rust
/// use tailrisk_core::ConfidenceLevel;
///
/// let level = ConfidenceLevel::new(0.95)?;
/// assert!((level.alpha() - 0.05).abs() < 1e-12);
/// assert!(ConfidenceLevel::new(1.5).is_err());
/// # Ok::<(), tailrisk_core::TailRiskError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// The conventional 95% confidence level.
    pub const P95: ConfidenceLevel = ConfidenceLevel(0.95);

    /// The conventional 99% confidence level.
    pub const P99: ConfidenceLevel = ConfidenceLevel(0.99);

    /// Creates a confidence level.
    ///
    /// # Errors
    ///
    /// Returns [`TailRiskError::InvalidConfidenceLevel`] unless the value is
    /// finite and strictly inside (0, 1).
    pub fn new(value: f64) -> TailRiskResult<Self> {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            return Err(TailRiskError::InvalidConfidenceLevel { value });
        }
        Ok(Self(value))
    }

    /// The conventional default levels, 95% and 99%.
    #[must_use]
    pub fn defaults() -> [ConfidenceLevel; 2] {
        [Self::P95, Self::P99]
    }

    /// Returns the confidence level as a fraction (e.g., 0.95).
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the one-sided tail probability, `1 - level`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = TailRiskError;

    fn try_from(value: f64) -> TailRiskResult<Self> {
        Self::new(value)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
