//! # Tailrisk Core
//!
//! Core types for the Tailrisk market risk analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Tailrisk:
//!
//! - **`PriceSeries`**: a validated, chronologically ordered sequence of
//!   closing prices
//! - **`ReturnSeries`**: daily logarithmic returns derived from a price
//!   series
//! - **`ConfidenceLevel`**: a validated confidence level in (0, 1)
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: validated newtypes make invalid states (non-positive
//!   prices, out-of-order dates, confidence levels outside (0, 1))
//!   unrepresentable once constructed
//! - **Purity**: every operation is a deterministic function of its inputs;
//!   no I/O, no logging, no global state
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let series = PriceSeries::from_pairs(vec![
//!     (NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), 100.0),
//!     (NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(), 102.0),
//!     (NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(), 101.0),
//! ])?;
//!
//! let returns = series.log_returns()?;
//! assert_eq!(returns.len(), 2);
//! # Ok::<(), tailrisk_core::TailRiskError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

pub use error::{TailRiskError, TailRiskResult};
pub use types::{ConfidenceLevel, PricePoint, PriceSeries, ReturnSeries};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{TailRiskError, TailRiskResult};
    pub use crate::types::{ConfidenceLevel, PricePoint, PriceSeries, ReturnSeries};
}
