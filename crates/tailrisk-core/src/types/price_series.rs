//! Price series type and the log-return builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TailRiskError, TailRiskResult};
use crate::types::ReturnSeries;

/// A single dated closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Closing price. Strictly positive and finite once part of a
    /// [`PriceSeries`].
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.date, self.close)
    }
}

/// A chronologically ordered series of closing prices.
///
/// Construction validates every observation: prices must be finite and
/// strictly positive, and dates must be strictly ascending. Once built the
/// series is immutable, so downstream computations can rely on those
/// invariants without re-checking.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::PriceSeries;
/// use chrono::NaiveDate;
///
/// let series = PriceSeries::from_pairs(vec![
///     (NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), 100.0),
///     (NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(), 102.0),
/// ])?;
/// assert_eq!(series.len(), 2);
/// # Ok::<(), tailrisk_core::TailRiskError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    observations: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a price series from dated observations.
    ///
    /// # Errors
    ///
    /// Returns [`TailRiskError::InvalidPrice`] if any price is non-positive
    /// or non-finite, and [`TailRiskError::UnorderedObservations`] if dates
    /// are not strictly ascending. Validation runs over the whole input
    /// before the series exists, so a bad observation never produces a
    /// partially built series.
    pub fn new(observations: Vec<PricePoint>) -> TailRiskResult<Self> {
        for (index, point) in observations.iter().enumerate() {
            if !point.close.is_finite() || point.close <= 0.0 {
                return Err(TailRiskError::invalid_price(index, point.close));
            }
        }

        for index in 1..observations.len() {
            if observations[index].date <= observations[index - 1].date {
                return Err(TailRiskError::UnorderedObservations { index });
            }
        }

        Ok(Self { observations })
    }

    /// Creates a price series from `(date, close)` pairs.
    pub fn from_pairs(pairs: Vec<(NaiveDate, f64)>) -> TailRiskResult<Self> {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, close)| PricePoint::new(date, close))
                .collect(),
        )
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the observations in chronological order.
    #[must_use]
    pub fn observations(&self) -> &[PricePoint] {
        &self.observations
    }

    /// Returns the closing prices in chronological order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.observations.iter().map(|p| p.close).collect()
    }

    /// Returns the first observation, if any.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.observations.first()
    }

    /// Returns the last observation, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.observations.last()
    }

    /// Builds the daily logarithmic return series.
    ///
    /// Each return is `ln(close[i+1] / close[i])`, the continuously
    /// compounded return between consecutive observations. Log returns are
    /// additive across time and approximate normality better than simple
    /// returns, which is what the parametric VaR method assumes.
    ///
    /// The output has exactly one element fewer than the price series and
    /// preserves chronological order.
    ///
    /// # Errors
    ///
    /// Returns [`TailRiskError::InsufficientData`] if the series has fewer
    /// than 2 observations.
    pub fn log_returns(&self) -> TailRiskResult<ReturnSeries> {
        if self.observations.len() < 2 {
            return Err(TailRiskError::insufficient_data(
                2,
                self.observations.len(),
            ));
        }

        let returns = self
            .observations
            .windows(2)
            .map(|pair| (pair[1].close / pair[0].close).ln())
            .collect();

        // Positivity is enforced at construction, so every ratio is finite
        // and the ReturnSeries invariant holds.
        ReturnSeries::new(returns)
    }
}
