//! Error types for analytical leaf formulas.
//!
//! Leaf formulas run inside attribute reads, so their errors are converted
//! into [`EvaluationError::ModelFailure`] tagged with the attribute being read.

use std::fmt;

use pricer_core::types::EvaluationError;
use thiserror::Error;

/// Model parameter subject to a domain check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Underlying spot S
    Spot,
    /// Strike K
    Strike,
    /// Volatility σ
    Volatility,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Parameter::Spot => "spot",
            Parameter::Strike => "strike",
            Parameter::Volatility => "volatility",
        })
    }
}

/// Analytical formula errors.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{AnalyticalError, Parameter};
///
/// let err = AnalyticalError::NonPositive { parameter: Parameter::Volatility, value: -0.2 };
/// assert_eq!(err.to_string(), "volatility must be positive, got -0.2");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// A parameter that must be strictly positive was not (NaN included).
    #[error("{parameter} must be positive, got {value}")]
    NonPositive {
        /// Offending parameter
        parameter: Parameter,
        /// Value supplied
        value: f64,
    },
}

impl AnalyticalError {
    /// Reports the failure as a read-time error of `attribute`.
    pub fn at(self, attribute: &str) -> EvaluationError {
        EvaluationError::ModelFailure {
            attribute: attribute.to_string(),
            message: self.to_string(),
        }
    }
}

/// Passes `value` through if strictly positive.
pub(crate) fn positive(parameter: Parameter, value: f64) -> Result<f64, AnalyticalError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(AnalyticalError::NonPositive { parameter, value })
    }
}
