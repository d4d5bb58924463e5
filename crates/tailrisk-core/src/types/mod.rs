//! Domain types for market risk analytics.
//!
//! This module provides type-safe representations of the quantities the
//! risk engine operates on:
//!
//! - [`PriceSeries`]: chronologically ordered closing prices
//! - [`PricePoint`]: a single dated price observation
//! - [`ReturnSeries`]: daily logarithmic returns
//! - [`ConfidenceLevel`]: a confidence level strictly inside (0, 1)

mod confidence;
mod price_series;
mod return_series;

pub use confidence::ConfidenceLevel;
pub use price_series::{PricePoint, PriceSeries};
pub use return_series::ReturnSeries;
