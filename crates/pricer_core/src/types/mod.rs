//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for construction and evaluation of lazy attributes
//!
//! # Re-exports
//!
//! For convenience, the error types are re-exported at this module level:
//! - [`ConfigurationError`], [`EvaluationError`], [`PricingError`] from `error`

pub mod error;

pub use error::{ConfigurationError, EvaluationError, PricingError};
