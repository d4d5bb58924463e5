//! Comparative VaR profiles across methods and confidence levels.

use tailrisk_core::{ConfidenceLevel, ReturnSeries};

use crate::error::VarError;
use crate::historical::historical_var;
use crate::parametric::parametric_var;
use crate::result::VaRResult;

/// Computes both estimation methods at each confidence level.
///
/// Produces one [`VaRResult`] per method × level, parametric first within
/// each level, in the order the levels were given. An empty `levels` slice
/// falls back to the conventional defaults, 95% and 99%.
///
/// The two methods are independent answers to the same question; no
/// reconciliation or preference between them is computed.
///
/// # Errors
///
/// Fails on the first estimation error; no partial profile is returned.
pub fn var_profile(
    returns: &ReturnSeries,
    levels: &[ConfidenceLevel],
) -> Result<Vec<VaRResult>, VarError> {
    let defaults = ConfidenceLevel::defaults();
    let levels: &[ConfidenceLevel] = if levels.is_empty() { &defaults } else { levels };

    let mut results = Vec::with_capacity(levels.len() * 2);
    for &level in levels {
        results.push(parametric_var(returns, level)?);
        results.push(historical_var(returns, level)?);
    }
    Ok(results)
}
