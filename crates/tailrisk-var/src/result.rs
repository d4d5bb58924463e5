//! VaR result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use tailrisk_core::ConfidenceLevel;

/// VaR estimation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaRMethod {
    /// Parametric (variance-covariance), assuming normally distributed
    /// returns.
    Parametric,
    /// Historical simulation from the empirical return distribution.
    Historical,
}

impl fmt::Display for VaRMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaRMethod::Parametric => write!(f, "Parametric"),
            VaRMethod::Historical => write!(f, "Historical"),
        }
    }
}

/// Value-at-Risk estimate for one (returns, confidence level, method)
/// triple.
///
/// A pure value: created fresh per estimation call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaRResult {
    /// Method used for the estimate.
    pub method: VaRMethod,
    /// Confidence level of the estimate.
    pub confidence_level: ConfidenceLevel,
    /// Signed return at the tail quantile. At typical confidence levels
    /// this is negative (a loss).
    pub threshold_return: f64,
    /// Potential loss magnitude, reported as a non-negative number:
    /// `max(0, -threshold_return)`. Zero signals no downside risk at the
    /// requested confidence level.
    pub var_value: f64,
}

impl VaRResult {
    /// Builds a result from a signed threshold return, applying the
    /// loss-magnitude convention.
    ///
    /// A non-negative threshold means even the tail quantile is a gain;
    /// the loss magnitude is clamped to zero rather than reported as a
    /// negative "loss".
    #[must_use]
    pub fn from_threshold(
        method: VaRMethod,
        confidence_level: ConfidenceLevel,
        threshold_return: f64,
    ) -> Self {
        Self {
            method,
            confidence_level,
            threshold_return,
            var_value: (-threshold_return).max(0.0),
        }
    }
}

impl fmt::Display for VaRResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} VaR ({}): {:.4}%",
            self.method,
            self.confidence_level,
            self.var_value * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_loss_threshold_reported_as_positive_magnitude() {
        let result =
            VaRResult::from_threshold(VaRMethod::Historical, ConfidenceLevel::P95, -0.0215);
        assert_relative_eq!(result.var_value, 0.0215);
    }

    #[test]
    fn test_gain_threshold_clamped_to_zero() {
        let result =
            VaRResult::from_threshold(VaRMethod::Parametric, ConfidenceLevel::P95, 0.003);
        assert_relative_eq!(result.var_value, 0.0);
        assert_relative_eq!(result.threshold_return, 0.003);
    }

    #[test]
    fn test_display() {
        let result =
            VaRResult::from_threshold(VaRMethod::Parametric, ConfidenceLevel::P99, -0.05);
        assert_eq!(result.to_string(), "Parametric VaR (99.0%): 5.0000%");
    }
}
