//! Named container of lazily-evaluated attributes.

use super::attribute::{Attribute, AttributeHandle};
use super::computation::{self, Computation};
use super::input::Input;
use crate::types::{ConfigurationError, EvaluationError, PricingError};

/// A named entity exposing lazily-evaluated scalar attributes.
///
/// The name is for display only and carries no identity. Attributes are
/// kept in definition order.
///
/// # Examples
/// ```
/// use pricer_core::lazy::{computation, MathObject};
///
/// let mut rect = MathObject::new("rect");
/// let w = rect.define("width", MathObject::input(2.0, 1.0)).unwrap();
/// let h = rect.define("height", MathObject::input(None::<f64>, 3.0)).unwrap();
/// rect.define("area", computation(move || Ok(w.evaluate()? * h.evaluate()?)))
///     .unwrap();
///
/// assert_eq!(rect.evaluate("area").unwrap(), 6.0);
///
/// rect.set("width", MathObject::wrap(4.0)).unwrap();
/// assert_eq!(rect.evaluate("area").unwrap(), 12.0);
/// ```
#[derive(Debug)]
pub struct MathObject {
    name: String,
    attributes: Vec<Attribute>,
}

impl MathObject {
    /// Creates an object with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Converts a loosely-typed input into a computation.
    ///
    /// Constants are wrapped, references delegate to the referenced
    /// attribute, and absent inputs yield `default`.
    pub fn input(value: impl Into<Input>, default: f64) -> Computation {
        value.into().resolve(default)
    }

    /// Lifts a constant into a computation.
    pub fn wrap(value: f64) -> Computation {
        computation::wrap(value)
    }

    /// Adds an attribute and returns a handle to it.
    ///
    /// # Errors
    /// `ConfigurationError::DuplicateAttribute` if `name` is already defined.
    pub fn define(
        &mut self,
        name: &str,
        computation: Computation,
    ) -> Result<AttributeHandle, ConfigurationError> {
        if self.attribute(name).is_some() {
            return Err(ConfigurationError::DuplicateAttribute {
                object: self.name.clone(),
                attribute: name.to_string(),
            });
        }

        let attribute = Attribute::new(&self.name, name, computation);
        let handle = attribute.get();
        self.attributes.push(attribute);
        Ok(handle)
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// Returns a fresh handle to the named attribute.
    pub fn get(&self, name: &str) -> Option<AttributeHandle> {
        self.attribute(name).map(Attribute::get)
    }

    /// Rebinds the named attribute.
    ///
    /// # Errors
    /// `ConfigurationError::UnknownAttribute` if `name` is not defined.
    pub fn set(&self, name: &str, computation: Computation) -> Result<(), ConfigurationError> {
        self.require(name)?.set(computation);
        Ok(())
    }

    /// Reads the named attribute.
    pub fn evaluate(&self, name: &str) -> Result<f64, PricingError> {
        Ok(self.require(name)?.evaluate()?)
    }

    /// Attribute names in definition order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::name)
    }

    /// Attributes in definition order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Reads every attribute, in definition order.
    ///
    /// A failing attribute does not stop the others from being read.
    pub fn evaluate_all(&self) -> Vec<(&str, Result<f64, EvaluationError>)> {
        self.attributes
            .iter()
            .map(|a| (a.name(), a.evaluate()))
            .collect()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attribute is defined.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn require(&self, name: &str) -> Result<&Attribute, ConfigurationError> {
        self.attribute(name)
            .ok_or_else(|| ConfigurationError::UnknownAttribute {
                object: self.name.clone(),
                attribute: name.to_string(),
            })
    }
}
