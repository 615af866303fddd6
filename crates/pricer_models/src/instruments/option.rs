//! Option base type.
//!
//! [`OptionBase`] standardises the `maturity` and `price` attribute names
//! shared by every option variant. It performs no pricing itself: `price`
//! starts as the constant 0 and a concrete variant installs its own model
//! over it.

use pricer_core::lazy::{AttributeHandle, Computation, Input, MathObject};
use pricer_core::traits::{LazyObject, Priceable};
use pricer_core::types::{ConfigurationError, EvaluationError};

/// Maturity attribute name.
pub const MATURITY: &str = "maturity";
/// Price attribute name.
pub const PRICE: &str = "price";

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Right to buy
    Call,
    /// Right to sell
    Put,
}

impl OptionKind {
    /// Payoff sign ω: +1 for a call, −1 for a put.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }
}

/// Capabilities shared by all option variants.
///
/// Object safe, so variants can be mixed behind `&dyn OptionInstrument`.
///
/// # Examples
/// ```
/// use pricer_core::traits::Priceable;
/// use pricer_models::instruments::{OptionBase, OptionInstrument};
///
/// let base = OptionBase::new("placeholder", 2.0).unwrap();
/// let options: Vec<&dyn OptionInstrument> = vec![&base];
/// assert_eq!(options[0].maturity().unwrap(), 2.0);
/// assert_eq!(options[0].price().unwrap(), 0.0);
/// ```
pub trait OptionInstrument: Priceable + LazyObject {
    /// Maturity in years.
    fn maturity(&self) -> Result<f64, EvaluationError>;
}

/// Attributes common to every option.
#[derive(Debug)]
pub struct OptionBase {
    object: MathObject,
    maturity: AttributeHandle,
    price: AttributeHandle,
}

impl OptionBase {
    /// Creates the base attributes.
    ///
    /// `maturity` has no default. Leaving it absent still builds the
    /// option, but every read depending on it fails with
    /// `EvaluationError::MissingInput`.
    pub fn new(name: impl Into<String>, maturity: impl Into<Input>) -> Result<Self, ConfigurationError> {
        let mut object = MathObject::new(name);
        let label = format!("{}.{}", object.name(), MATURITY);
        let maturity = object.define(MATURITY, maturity.into().resolve_required(&label))?;
        let price = object.define(PRICE, MathObject::wrap(0.0))?;

        Ok(Self {
            object,
            maturity,
            price,
        })
    }

    /// Handle to the maturity attribute.
    pub fn maturity_handle(&self) -> AttributeHandle {
        self.maturity.clone()
    }

    /// Handle to the price attribute.
    pub fn price_handle(&self) -> AttributeHandle {
        self.price.clone()
    }

    /// Installs a pricing computation.
    pub fn set_price(&self, computation: Computation) {
        if let Some(attribute) = self.object.attribute(PRICE) {
            attribute.set(computation);
        }
    }

    /// Rebinds the maturity; absent makes it missing again.
    pub fn set_maturity(&self, value: impl Into<Input>) {
        if let Some(attribute) = self.object.attribute(MATURITY) {
            attribute.set(value.into().resolve_required(attribute.label()));
        }
    }

    /// Mutable access for variants adding their own attributes.
    pub fn math_object_mut(&mut self) -> &mut MathObject {
        &mut self.object
    }
}

impl LazyObject for OptionBase {
    fn math_object(&self) -> &MathObject {
        &self.object
    }
}

impl Priceable for OptionBase {
    fn price(&self) -> Result<f64, EvaluationError> {
        self.price.evaluate()
    }
}

impl OptionInstrument for OptionBase {
    fn maturity(&self) -> Result<f64, EvaluationError> {
        self.maturity.evaluate()
    }
}
