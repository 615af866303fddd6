//! Error types for structured error handling.
//!
//! This module provides:
//! - `ConfigurationError`: Errors raised while building a math object
//! - `EvaluationError`: Errors raised while reading a lazy attribute
//! - `PricingError`: Umbrella error covering both phases

use std::fmt;
use thiserror::Error;

/// Construction-time errors.
///
/// These are raised synchronously out of constructors and factories, so a
/// misconfigured instrument is never built.
///
/// # Examples
/// ```
/// use pricer_core::types::ConfigurationError;
///
/// let err = ConfigurationError::InvalidInput {
///     attribute: "yield_to_maturity".to_string(),
///     found: "string".to_string(),
/// };
/// assert!(format!("{}", err).contains("yield_to_maturity"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Input is neither a number, an attribute reference, nor absent.
    #[error("Invalid input for '{attribute}': expected a number, an attribute reference or null, found {found}")]
    InvalidInput {
        /// Attribute the input was destined for
        attribute: String,
        /// Kind of value actually supplied
        found: String,
    },

    /// Attribute name already defined on the object.
    #[error("Duplicate attribute '{attribute}' on '{object}'")]
    DuplicateAttribute {
        /// Owning object name
        object: String,
        /// Clashing attribute name
        attribute: String,
    },

    /// Attribute name not defined on the object.
    #[error("Unknown attribute '{attribute}' on '{object}'")]
    UnknownAttribute {
        /// Owning object name
        object: String,
        /// Requested attribute name
        attribute: String,
    },

    /// Invalid evaluator configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Read-time errors.
///
/// Raised out of the specific attribute read that triggered them. A failed
/// read never leaves the object in a state that blocks later reads.
///
/// # Examples
/// ```
/// use pricer_core::types::EvaluationError;
///
/// let err = EvaluationError::CyclicDependency { attribute: "a.x".to_string() };
/// assert_eq!(format!("{}", err), "Cyclic dependency detected while evaluating 'a.x'");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A denominator evaluated to zero.
    #[error("Division by zero in '{attribute}': {denominator} evaluated to zero")]
    DivisionByZero {
        /// Attribute being computed
        attribute: String,
        /// Description of the zero-valued denominator
        denominator: String,
    },

    /// A required input was never supplied.
    #[error("Missing required input '{attribute}'")]
    MissingInput {
        /// Attribute lacking an input
        attribute: String,
    },

    /// The attribute's computation transitively reads itself.
    #[error("Cyclic dependency detected while evaluating '{attribute}'")]
    CyclicDependency {
        /// Attribute re-entered during its own evaluation
        attribute: String,
    },

    /// Dependency chain is deeper than the configured limit.
    #[error("Dependency depth limit of {limit} exceeded while evaluating '{attribute}'")]
    DepthExceeded {
        /// Attribute at which the limit was hit
        attribute: String,
        /// Configured limit
        limit: usize,
    },

    /// The referenced attribute's owner has been dropped.
    #[error("Attribute '{attribute}' is no longer alive")]
    DanglingReference {
        /// Label of the dropped attribute
        attribute: String,
    },

    /// A leaf pricing formula rejected its inputs.
    #[error("Model failure in '{attribute}': {message}")]
    ModelFailure {
        /// Attribute being computed
        attribute: String,
        /// Description from the pricing model
        message: String,
    },
}

/// Categorised pricing errors.
///
/// Wraps both construction and evaluation failures for callers that do not
/// need to distinguish the phase.
///
/// # Examples
/// ```
/// use pricer_core::types::{EvaluationError, PricingError};
///
/// let err: PricingError = EvaluationError::MissingInput {
///     attribute: "opt.maturity".to_string(),
/// }
/// .into();
/// assert!(err.is_evaluation());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Construction-time failure
    Configuration(ConfigurationError),

    /// Read-time failure
    Evaluation(EvaluationError),
}

impl PricingError {
    /// Returns true for read-time failures.
    pub fn is_evaluation(&self) -> bool {
        matches!(self, PricingError::Evaluation(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::Configuration(err) => write!(f, "Configuration error: {}", err),
            PricingError::Evaluation(err) => write!(f, "Evaluation error: {}", err),
        }
    }
}

impl std::error::Error for PricingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricingError::Configuration(err) => Some(err),
            PricingError::Evaluation(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for PricingError {
    fn from(err: ConfigurationError) -> Self {
        PricingError::Configuration(err)
    }
}

impl From<EvaluationError> for PricingError {
    fn from(err: EvaluationError) -> Self {
        PricingError::Evaluation(err)
    }
}
