//! Return series type.

use serde::{Deserialize, Serialize};

use crate::error::{TailRiskError, TailRiskResult};

/// A chronologically ordered series of logarithmic returns.
///
/// Usually produced by [`PriceSeries::log_returns`], in which case it holds
/// one element fewer than the originating price series. A `ReturnSeries`
/// can also be built directly from returns obtained elsewhere; construction
/// rejects non-finite values so downstream statistics never see NaN.
///
/// [`PriceSeries::log_returns`]: crate::types::PriceSeries::log_returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    returns: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a return series from raw return values.
    ///
    /// # Errors
    ///
    /// Returns [`TailRiskError::InvalidReturn`] if any value is NaN or
    /// infinite.
    pub fn new(returns: Vec<f64>) -> TailRiskResult<Self> {
        for (index, &value) in returns.iter().enumerate() {
            if !value.is_finite() {
                return Err(TailRiskError::InvalidReturn { index, value });
            }
        }
        Ok(Self { returns })
    }

    /// Returns the number of return observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Returns true if the series holds no returns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Returns the returns in chronological order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.returns
    }

    /// Returns a copy of the returns sorted ascending (worst first).
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.returns.clone();
        // Values are finite by construction, so total_cmp is a plain sort.
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl AsRef<[f64]> for ReturnSeries {
    fn as_ref(&self) -> &[f64] {
        &self.returns
    }
}
