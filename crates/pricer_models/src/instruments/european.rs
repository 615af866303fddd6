//! European option priced with Black-Scholes.
//!
//! The option extends [`OptionBase`]: it adds its market inputs to the same
//! attribute table and installs a Black-Scholes computation over the base
//! `price` attribute.

use pricer_core::lazy::{computation, AttributeHandle, Computation, Input, MathObject};
use pricer_core::traits::{LazyObject, Priceable};
use pricer_core::types::{ConfigurationError, EvaluationError};

use super::option::{OptionBase, OptionInstrument, OptionKind, PRICE};
use crate::analytical::BlackScholes;

/// Spot attribute name.
pub const SPOT: &str = "spot";
/// Strike attribute name.
pub const STRIKE: &str = "strike";
/// Risk-free rate attribute name.
pub const RATE: &str = "rate";
/// Volatility attribute name.
pub const VOLATILITY: &str = "volatility";
/// Pricing time attribute name.
pub const PRICING_TIME: &str = "pricing_time";
/// Time to expiry attribute name.
pub const TIME_TO_EXPIRY: &str = "time_to_expiry";
/// Delta attribute name.
pub const DELTA: &str = "delta";
/// Vega attribute name.
pub const VEGA: &str = "vega";

const DEFAULT_SPOT: f64 = 100.0;
const DEFAULT_STRIKE: f64 = 100.0;
const DEFAULT_RATE: f64 = 0.0;
const DEFAULT_VOLATILITY: f64 = 0.2;
const DEFAULT_PRICING_TIME: f64 = 0.0;

/// Market inputs read together by every Black-Scholes attribute.
#[derive(Clone)]
struct Leaf {
    spot: AttributeHandle,
    strike: AttributeHandle,
    rate: AttributeHandle,
    volatility: AttributeHandle,
    time_to_expiry: AttributeHandle,
}

impl Leaf {
    /// Reads the inputs and builds the model, returning it with strike and expiry.
    fn model(&self, label: &str) -> Result<(BlackScholes, f64, f64), EvaluationError> {
        let strike = self.strike.evaluate()?;
        let expiry = self.time_to_expiry.evaluate()?;
        let model = BlackScholes::new(
            self.spot.evaluate()?,
            self.rate.evaluate()?,
            self.volatility.evaluate()?,
        )
        .map_err(|e| e.at(label))?;
        BlackScholes::validate_strike(strike).map_err(|e| e.at(label))?;
        Ok((model, strike, expiry))
    }
}

/// European option.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EuropeanOption, OptionInstrument, OptionKind};
///
/// let call = EuropeanOption::builder("atm", OptionKind::Call)
///     .rate(0.05)
///     .maturity(1.0)
///     .build()
///     .unwrap();
/// assert!((call.price().unwrap() - 10.4506).abs() < 1e-3);
///
/// call.set_volatility(0.3);
/// assert!(call.price().unwrap() > 10.4506);
/// ```
#[derive(Debug)]
pub struct EuropeanOption {
    base: OptionBase,
    kind: OptionKind,
    spot: AttributeHandle,
    strike: AttributeHandle,
    rate: AttributeHandle,
    volatility: AttributeHandle,
    pricing_time: AttributeHandle,
    time_to_expiry: AttributeHandle,
    delta: AttributeHandle,
    vega: AttributeHandle,
}

impl EuropeanOption {
    /// Starts a builder.
    pub fn builder(name: impl Into<String>, kind: OptionKind) -> EuropeanOptionBuilder {
        EuropeanOptionBuilder::new(name, kind)
    }

    /// Call or put.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Spot price S.
    pub fn spot(&self) -> Result<f64, EvaluationError> {
        self.spot.evaluate()
    }

    /// Strike K.
    pub fn strike(&self) -> Result<f64, EvaluationError> {
        self.strike.evaluate()
    }

    /// Continuously compounded rate r.
    pub fn rate(&self) -> Result<f64, EvaluationError> {
        self.rate.evaluate()
    }

    /// Volatility σ.
    pub fn volatility(&self) -> Result<f64, EvaluationError> {
        self.volatility.evaluate()
    }

    /// Pricing time in years.
    pub fn pricing_time(&self) -> Result<f64, EvaluationError> {
        self.pricing_time.evaluate()
    }

    /// Maturity minus pricing time.
    pub fn time_to_expiry(&self) -> Result<f64, EvaluationError> {
        self.time_to_expiry.evaluate()
    }

    /// Option premium.
    pub fn price(&self) -> Result<f64, EvaluationError> {
        self.base.price()
    }

    /// ∂V/∂S.
    pub fn delta(&self) -> Result<f64, EvaluationError> {
        self.delta.evaluate()
    }

    /// ∂V/∂σ.
    pub fn vega(&self) -> Result<f64, EvaluationError> {
        self.vega.evaluate()
    }

    /// Rebinds the spot.
    pub fn set_spot(&self, value: impl Into<Input>) {
        self.rebind(SPOT, value.into().resolve(DEFAULT_SPOT));
    }

    /// Rebinds the strike.
    pub fn set_strike(&self, value: impl Into<Input>) {
        self.rebind(STRIKE, value.into().resolve(DEFAULT_STRIKE));
    }

    /// Rebinds the rate.
    pub fn set_rate(&self, value: impl Into<Input>) {
        self.rebind(RATE, value.into().resolve(DEFAULT_RATE));
    }

    /// Rebinds the volatility.
    pub fn set_volatility(&self, value: impl Into<Input>) {
        self.rebind(VOLATILITY, value.into().resolve(DEFAULT_VOLATILITY));
    }

    /// Rebinds the pricing time.
    pub fn set_pricing_time(&self, value: impl Into<Input>) {
        self.rebind(PRICING_TIME, value.into().resolve(DEFAULT_PRICING_TIME));
    }

    /// Rebinds the maturity.
    pub fn set_maturity(&self, value: impl Into<Input>) {
        self.base.set_maturity(value);
    }

    fn rebind(&self, name: &str, computation: Computation) {
        if let Some(attribute) = self.base.math_object().attribute(name) {
            attribute.set(computation);
        }
    }
}

impl LazyObject for EuropeanOption {
    fn math_object(&self) -> &MathObject {
        self.base.math_object()
    }
}

impl Priceable for EuropeanOption {
    fn price(&self) -> Result<f64, EvaluationError> {
        self.base.price()
    }
}

impl OptionInstrument for EuropeanOption {
    fn maturity(&self) -> Result<f64, EvaluationError> {
        self.base.maturity()
    }
}

/// Builder for [`EuropeanOption`].
#[derive(Debug)]
pub struct EuropeanOptionBuilder {
    name: String,
    kind: OptionKind,
    spot: Input,
    strike: Input,
    rate: Input,
    volatility: Input,
    maturity: Input,
    pricing_time: Input,
}

impl EuropeanOptionBuilder {
    /// Creates a builder with every input absent.
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            spot: Input::UseDefault,
            strike: Input::UseDefault,
            rate: Input::UseDefault,
            volatility: Input::UseDefault,
            maturity: Input::UseDefault,
            pricing_time: Input::UseDefault,
        }
    }

    /// Sets the spot.
    pub fn spot(mut self, value: impl Into<Input>) -> Self {
        self.spot = value.into();
        self
    }

    /// Sets the strike.
    pub fn strike(mut self, value: impl Into<Input>) -> Self {
        self.strike = value.into();
        self
    }

    /// Sets the rate.
    pub fn rate(mut self, value: impl Into<Input>) -> Self {
        self.rate = value.into();
        self
    }

    /// Sets the volatility.
    pub fn volatility(mut self, value: impl Into<Input>) -> Self {
        self.volatility = value.into();
        self
    }

    /// Sets the maturity. Without one every pricing read fails.
    pub fn maturity(mut self, value: impl Into<Input>) -> Self {
        self.maturity = value.into();
        self
    }

    /// Sets the pricing time.
    pub fn pricing_time(mut self, value: impl Into<Input>) -> Self {
        self.pricing_time = value.into();
        self
    }

    /// Wires the attribute graph.
    pub fn build(self) -> Result<EuropeanOption, ConfigurationError> {
        let kind = self.kind;
        let mut base = OptionBase::new(self.name, self.maturity)?;
        let maturity = base.maturity_handle();
        let name = base.math_object().name().to_string();
        let object = base.math_object_mut();

        let spot = object.define(SPOT, self.spot.resolve(DEFAULT_SPOT))?;
        let strike = object.define(STRIKE, self.strike.resolve(DEFAULT_STRIKE))?;
        let rate = object.define(RATE, self.rate.resolve(DEFAULT_RATE))?;
        let volatility = object.define(VOLATILITY, self.volatility.resolve(DEFAULT_VOLATILITY))?;
        let pricing_time =
            object.define(PRICING_TIME, self.pricing_time.resolve(DEFAULT_PRICING_TIME))?;

        let time_to_expiry = object.define(TIME_TO_EXPIRY, {
            let (t, t0) = (maturity, pricing_time.clone());
            computation(move || Ok(t.evaluate()? - t0.evaluate()?))
        })?;

        let leaf = Leaf {
            spot: spot.clone(),
            strike: strike.clone(),
            rate: rate.clone(),
            volatility: volatility.clone(),
            time_to_expiry: time_to_expiry.clone(),
        };

        let delta = object.define(DELTA, {
            let leaf = leaf.clone();
            let label = format!("{}.{}", name, DELTA);
            computation(move || {
                let (model, strike, expiry) = leaf.model(&label)?;
                Ok(model.delta(strike, expiry, kind))
            })
        })?;

        let vega = object.define(VEGA, {
            let leaf = leaf.clone();
            let label = format!("{}.{}", name, VEGA);
            computation(move || {
                let (model, strike, expiry) = leaf.model(&label)?;
                Ok(model.vega(strike, expiry))
            })
        })?;

        base.set_price({
            let label = format!("{}.{}", name, PRICE);
            computation(move || {
                let (model, strike, expiry) = leaf.model(&label)?;
                Ok(model.price(strike, expiry, kind))
            })
        });

        tracing::debug!(option = %name, ?kind, "European option constructed");

        Ok(EuropeanOption {
            base,
            kind,
            spot,
            strike,
            rate,
            volatility,
            pricing_time,
            time_to_expiry,
            delta,
            vega,
        })
    }
}
