//! Comparative risk report.
//!
//! Bundles the return-series summary with a VaR profile so a reporting or
//! plotting layer gets everything it needs in one value. Rendering beyond
//! plain text is deliberately left to that layer; this module only
//! formats.

use serde::{Deserialize, Serialize};
use std::fmt;

use tailrisk_core::{ConfidenceLevel, ReturnSeries};
use tailrisk_math::stats::{mean, sample_std};

use crate::error::VarError;
use crate::profile::var_profile;
use crate::result::VaRResult;

/// Summary of a return series together with its VaR profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Number of return observations analyzed.
    pub observations: usize,
    /// Mean daily log return.
    pub mean_return: f64,
    /// Daily volatility (unbiased sample standard deviation).
    pub daily_volatility: f64,
    /// One result per method × confidence level.
    pub results: Vec<VaRResult>,
}

impl RiskReport {
    /// Builds a report from a return series, estimating both methods at
    /// each confidence level (defaults to 95% and 99% when `levels` is
    /// empty).
    ///
    /// # Errors
    ///
    /// Fails for fewer than 2 returns, like the underlying estimators.
    pub fn from_returns(
        returns: &ReturnSeries,
        levels: &[ConfidenceLevel],
    ) -> Result<Self, VarError> {
        let results = var_profile(returns, levels)?;
        Ok(Self {
            observations: returns.len(),
            mean_return: mean(returns.as_slice())?,
            daily_volatility: sample_std(returns.as_slice())?,
            results,
        })
    }
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:=<44}", "")?;
        writeln!(f, "   MARKET RISK ANALYSIS REPORT")?;
        writeln!(f, "{:=<44}", "")?;
        writeln!(f, "Observations:        {}", self.observations)?;
        writeln!(f, "Mean daily return:   {:.4}%", self.mean_return * 100.0)?;
        writeln!(
            f,
            "Daily volatility:    {:.4}%",
            self.daily_volatility * 100.0
        )?;
        writeln!(f, "{:-<44}", "")?;
        for result in &self.results {
            writeln!(f, "{result}")?;
        }
        write!(f, "{:=<44}", "")
    }
}
