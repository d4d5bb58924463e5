//! Equal-width histogram binning.
//!
//! Pure computation feeding an external plotting layer: the risk engine
//! itself renders nothing, but a distribution plot with VaR thresholds
//! marked needs the binned return counts.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// A single histogram bin over `[lower, upper)` (the last bin is closed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge; exclusive except for the final bin.
    pub upper: f64,
    /// Number of observations falling in the bin.
    pub count: usize,
}

/// Bins a sample into `bin_count` equal-width bins spanning `[min, max]`.
///
/// A degenerate sample whose values are all equal collapses into a single
/// bin containing every observation.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample and
/// [`MathError::InvalidInput`] for a zero bin count.
pub fn histogram(values: &[f64], bin_count: usize) -> MathResult<Vec<HistogramBin>> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if bin_count == 0 {
        return Err(MathError::invalid_input("bin count must be positive"));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }]);
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0_usize; bin_count];

    for &value in values {
        let index = ((value - min) / width) as usize;
        // max lands exactly on the upper edge; fold it into the last bin.
        counts[index.min(bin_count - 1)] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect())
}
