//! Analytical pricing formulas.
//!
//! Closed-form leaf computations plugged into instrument attributes:
//! - [`BlackScholes`]: lognormal European option price, delta and vega
//! - [`norm_cdf`] / [`norm_pdf`]: standard normal distribution
//! - [`AnalyticalError`]: parameter domain failures

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::{AnalyticalError, Parameter};
