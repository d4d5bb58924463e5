//! # tailrisk-data
//!
//! File-based price data loading for the Tailrisk market risk library.
//!
//! The computational core only requires an abstract, ordered
//! [`PriceSeries`](tailrisk_core::PriceSeries); this crate supplies the
//! one concrete source used in practice, a CSV table of dated closing
//! prices. Rows are sorted by date after parsing, so exported files do not
//! need to be pre-sorted, and the core's validation still rejects
//! duplicates and bad prices.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

mod csv_source;
mod error;

pub use csv_source::{read_price_series, CsvPriceSource};
pub use error::{DataError, DataResult};
