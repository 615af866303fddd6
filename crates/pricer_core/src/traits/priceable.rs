//! Traits for priceable instruments built on [`MathObject`].
//!
//! This module defines fundamental abstractions for:
//! - Attribute access by name (`LazyObject` trait)
//! - Price calculation (`Priceable` trait)
//!
//! Both are object safe, so heterogeneous instruments can sit behind
//! `&dyn Priceable` in a portfolio view.

use crate::lazy::{AttributeHandle, MathObject};
use crate::types::{EvaluationError, PricingError};

/// Trait for instruments backed by a [`MathObject`].
///
/// # Examples
/// ```
/// use pricer_core::lazy::MathObject;
/// use pricer_core::traits::LazyObject;
///
/// struct Deposit {
///     object: MathObject,
/// }
///
/// impl LazyObject for Deposit {
///     fn math_object(&self) -> &MathObject {
///         &self.object
///     }
/// }
///
/// let mut object = MathObject::new("deposit");
/// object.define("notional", MathObject::wrap(1_000.0)).unwrap();
/// let deposit = Deposit { object };
///
/// assert_eq!(deposit.name(), "deposit");
/// assert_eq!(deposit.read("notional").unwrap(), 1_000.0);
/// ```
pub trait LazyObject {
    /// The underlying attribute table.
    fn math_object(&self) -> &MathObject;

    /// Display name.
    fn name(&self) -> &str {
        self.math_object().name()
    }

    /// Fresh handle to the named attribute, if defined.
    fn attribute(&self, name: &str) -> Option<AttributeHandle> {
        self.math_object().get(name)
    }

    /// Reads the named attribute.
    fn read(&self, name: &str) -> Result<f64, PricingError> {
        self.math_object().evaluate(name)
    }
}

/// Trait for entities that can be priced.
///
/// # Invariants
/// - Deterministic given the current state of every transitively read input
/// - Re-evaluated on every call
pub trait Priceable {
    /// Calculate the price of the instrument.
    fn price(&self) -> Result<f64, EvaluationError>;
}
