//! # Tailrisk Math
//!
//! Statistical utilities for the Tailrisk market risk analytics library.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: mean, sample variance and standard
//!   deviation (unbiased, n−1 denominator)
//! - **Empirical quantiles**: linear-interpolation percentile with a
//!   documented convention, so quantile-based risk numbers are
//!   bit-reproducible
//! - **Normal quantiles**: inverse CDF of the standard normal distribution
//! - **Histograms**: equal-width binning of a sample for distribution plots
//!
//! ## Design Philosophy
//!
//! - **Determinism**: every function is a pure function of its inputs
//! - **Numerical Stability**: careful handling of degenerate samples
//!   (zero variance, single observation, all-equal values)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod histogram;
pub mod normal;
pub mod quantile;
pub mod stats;

pub use error::{MathError, MathResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::histogram::{histogram, HistogramBin};
    pub use crate::normal::standard_normal_quantile;
    pub use crate::quantile::quantile;
    pub use crate::stats::{mean, sample_std, sample_variance};
}
