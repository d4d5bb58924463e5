//! # tailrisk-var
//!
//! Value-at-Risk estimation for the Tailrisk market risk library.
//!
//! Two estimation methods share the same inputs (a return series and a
//! confidence level) but make different distributional assumptions:
//!
//! - **Parametric (variance-covariance)**: fits a normal distribution to
//!   the returns and reads the loss threshold off the fitted quantile.
//!   Fast and closed-form, but sensitive to the normality assumption.
//! - **Historical simulation**: takes the empirical quantile of the
//!   observed returns. Assumption-free, but entirely dependent on the
//!   historical window being representative.
//!
//! Both methods are first-class; [`var_profile`] computes them side by
//! side so callers can juxtapose the answers, and [`report::RiskReport`]
//! renders the comparison as text.
//!
//! ## Example
//!
//! ```ignore
//! use tailrisk_core::prelude::*;
//! use tailrisk_var::{historical_var, parametric_var};
//!
//! let returns = prices.log_returns()?;
//! let parametric = parametric_var(&returns, ConfidenceLevel::P95)?;
//! let historical = historical_var(&returns, ConfidenceLevel::P95)?;
//! println!("{parametric} vs {historical}");
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

mod error;
mod historical;
mod parametric;
mod profile;
mod result;

pub mod report;

pub use error::VarError;
pub use historical::historical_var;
pub use parametric::parametric_var;
pub use profile::var_profile;
pub use result::{VaRMethod, VaRResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::VarError;
    pub use crate::historical::historical_var;
    pub use crate::parametric::parametric_var;
    pub use crate::profile::var_profile;
    pub use crate::report::RiskReport;
    pub use crate::result::{VaRMethod, VaRResult};
}
