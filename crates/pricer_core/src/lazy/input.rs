//! Loosely-typed attribute inputs.
//!
//! An instrument input is a constant, a reference to another object's
//! attribute, a caller-supplied computation, or absent (use the default).
//! [`Input`] is the tagged union of those, and [`Input::resolve`] turns any
//! of them into a uniform [`Computation`].

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::attribute::{Attribute, AttributeHandle};
use super::computation::{wrap, Computation};
use crate::types::{ConfigurationError, EvaluationError};

/// Input for an instrument attribute.
///
/// # Examples
/// ```
/// use pricer_core::lazy::{wrap, Attribute, Input};
///
/// assert_eq!(Input::from(3.0).resolve(1.0)().unwrap(), 3.0);
/// assert_eq!(Input::UseDefault.resolve(1.0)().unwrap(), 1.0);
///
/// let spot = Attribute::new("market", "spot", wrap(101.5));
/// assert_eq!(Input::from(&spot).resolve(0.0)().unwrap(), 101.5);
/// ```
#[derive(Clone, Default)]
pub enum Input {
    /// Fixed value
    Constant(f64),
    /// Live link to another attribute
    Reference(AttributeHandle),
    /// Arbitrary deferred computation
    Computed(Computation),
    /// Absent; the attribute's default applies
    #[default]
    UseDefault,
}

impl Input {
    /// Converts the input into a computation, substituting `default` when absent.
    pub fn resolve(self, default: f64) -> Computation {
        match self {
            Input::Constant(value) => wrap(value),
            Input::Reference(handle) => handle.to_computation(),
            Input::Computed(computation) => computation,
            Input::UseDefault => wrap(default),
        }
    }

    /// Converts an input that has no default.
    ///
    /// An absent input still yields a computation, one that fails with
    /// [`EvaluationError::MissingInput`] whenever it is read.
    pub fn resolve_required(self, attribute: &str) -> Computation {
        match self {
            Input::UseDefault => {
                let attribute = attribute.to_string();
                Rc::new(move || {
                    Err(EvaluationError::MissingInput {
                        attribute: attribute.clone(),
                    })
                })
            }
            other => other.resolve(0.0),
        }
    }

    /// Returns true for [`Input::UseDefault`].
    pub fn is_default(&self) -> bool {
        matches!(self, Input::UseDefault)
    }

    /// Parses an input from a JSON value.
    ///
    /// Numbers become constants and `null` means absent. Strings, booleans,
    /// arrays and objects are rejected.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::lazy::Input;
    /// use serde_json::json;
    ///
    /// assert!(matches!(Input::from_json("y", &json!(0.05)), Ok(Input::Constant(_))));
    /// assert!(Input::from_json("y", &json!(null)).unwrap().is_default());
    /// assert!(Input::from_json("y", &json!("five percent")).is_err());
    /// ```
    pub fn from_json(attribute: &str, value: &Value) -> Result<Self, ConfigurationError> {
        let found = match value {
            Value::Null => return Ok(Input::UseDefault),
            Value::Number(number) => {
                return number
                    .as_f64()
                    .map(Input::Constant)
                    .ok_or_else(|| ConfigurationError::InvalidInput {
                        attribute: attribute.to_string(),
                        found: format!("unrepresentable number {}", number),
                    })
            }
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };

        Err(ConfigurationError::InvalidInput {
            attribute: attribute.to_string(),
            found: found.to_string(),
        })
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Input::Reference(handle) => f.debug_tuple("Reference").field(handle).finish(),
            Input::Computed(_) => f.write_str("Computed(..)"),
            Input::UseDefault => f.write_str("UseDefault"),
        }
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Constant(value)
    }
}

impl From<AttributeHandle> for Input {
    fn from(handle: AttributeHandle) -> Self {
        Input::Reference(handle)
    }
}

impl From<Computation> for Input {
    fn from(computation: Computation) -> Self {
        Input::Computed(computation)
    }
}

impl From<&AttributeHandle> for Input {
    fn from(handle: &AttributeHandle) -> Self {
        Input::Reference(handle.clone())
    }
}

impl From<&Attribute> for Input {
    fn from(attribute: &Attribute) -> Self {
        Input::Reference(attribute.get())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::UseDefault, Into::into)
    }
}

impl TryFrom<&Value> for Input {
    type Error = ConfigurationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Input::from_json("input", value)
    }
}
