//! Fixed-coupon bond with lazily-evaluated risk measures.
//!
//! Inputs (with defaults):
//!
//! | Attribute | Symbol | Default |
//! |-----------|--------|---------|
//! | `face_value` | F | 100 |
//! | `yield_to_maturity` | Y (per coupon period) | 0 |
//! | `maturity` | T (years) | 1 |
//! | `pricing_time` | T0 (years) | 0 |
//! | `coupon_rate` | C (annual) | 0 |
//! | `frequency` | M (coupons per year) | 1 |
//!
//! Derived attributes, with n = (T − T0)·M:
//!
//! - `coupon_payment`: Cp = C·F / M
//! - `price`: Σᵢ Cp/(1+Y)ⁱ + F/(1+Y)ⁿ
//! - `duration`: [Σᵢ Cp/(1+Y)ⁱ · i/M + F/(1+Y)ⁿ · (T − T0)] / Pt
//! - `modified_duration`: D / (1+Y)
//! - `convexity`: [Σᵢ Cp·i·(i+1)/(1+Y)ⁱ + F·n·(n+1)/(1+Y)ⁿ] / (Pt·(1+Y)²)
//!
//! Coupon sums run over i = 1, 2, … while i ≤ n and are skipped entirely
//! when Cp ≤ 0. The principal term discounts over the exact, possibly
//! fractional, n.

use pricer_core::lazy::{checked_div, computation, AttributeHandle, Computation, Input, MathObject};
use pricer_core::traits::{LazyObject, Priceable};
use pricer_core::types::{ConfigurationError, EvaluationError};
use serde::Deserialize;
use serde_json::Value;

use crate::schedules::Frequency;

/// Face value attribute name.
pub const FACE_VALUE: &str = "face_value";
/// Yield to maturity attribute name.
pub const YIELD_TO_MATURITY: &str = "yield_to_maturity";
/// Maturity attribute name.
pub const MATURITY: &str = "maturity";
/// Pricing time attribute name.
pub const PRICING_TIME: &str = "pricing_time";
/// Coupon rate attribute name.
pub const COUPON_RATE: &str = "coupon_rate";
/// Coupon frequency attribute name.
pub const FREQUENCY: &str = "frequency";
/// Remaining coupon periods attribute name.
pub const PERIODS: &str = "periods";
/// Coupon payment attribute name.
pub const COUPON_PAYMENT: &str = "coupon_payment";
/// Price attribute name.
pub const PRICE: &str = "price";
/// Duration attribute name.
pub const DURATION: &str = "duration";
/// Modified duration attribute name.
pub const MODIFIED_DURATION: &str = "modified_duration";
/// Convexity attribute name.
pub const CONVEXITY: &str = "convexity";

const DEFAULT_FACE_VALUE: f64 = 100.0;
const DEFAULT_YIELD: f64 = 0.0;
const DEFAULT_MATURITY: f64 = 1.0;
const DEFAULT_PRICING_TIME: f64 = 0.0;
const DEFAULT_COUPON_RATE: f64 = 0.0;
const DEFAULT_FREQUENCY: f64 = 1.0;

/// Coupon indices 1, 2, … up to and including `n`.
fn coupon_periods(n: f64) -> impl Iterator<Item = i32> {
    (1..).take_while(move |&i| f64::from(i) <= n)
}

/// Largest period count the coupon index can reach.
const MAX_PERIODS: f64 = i32::MAX as f64;

fn finite_periods(n: f64, attribute: &str) -> Result<f64, EvaluationError> {
    if !n.is_finite() {
        return Err(EvaluationError::ModelFailure {
            attribute: attribute.to_string(),
            message: format!("period count must be finite, got {}", n),
        });
    }
    if n > MAX_PERIODS {
        return Err(EvaluationError::ModelFailure {
            attribute: attribute.to_string(),
            message: format!("period count {} exceeds {}", n, MAX_PERIODS),
        });
    }
    Ok(n)
}

fn label(object: &MathObject, attribute: &str) -> String {
    format!("{}.{}", object.name(), attribute)
}

/// Bond instrument.
///
/// Every attribute is recomputed from the current inputs on each read.
/// Rebinding an input (for example the yield) is reflected by price,
/// duration and convexity on their next read.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Bond;
///
/// let bond = Bond::builder("zero")
///     .face_value(1000.0)
///     .yield_to_maturity(0.05)
///     .maturity(5.0)
///     .build()
///     .unwrap();
///
/// let expected = 1000.0 / 1.05_f64.powi(5);
/// assert!((bond.price().unwrap() - expected).abs() < 1e-9);
///
/// bond.set_yield_to_maturity(0.04);
/// assert!(bond.price().unwrap() > expected);
/// ```
#[derive(Debug)]
pub struct Bond {
    object: MathObject,
    face_value: AttributeHandle,
    yield_to_maturity: AttributeHandle,
    maturity: AttributeHandle,
    pricing_time: AttributeHandle,
    coupon_rate: AttributeHandle,
    frequency: AttributeHandle,
    periods: AttributeHandle,
    coupon_payment: AttributeHandle,
    price: AttributeHandle,
    duration: AttributeHandle,
    modified_duration: AttributeHandle,
    convexity: AttributeHandle,
}

impl Bond {
    /// Creates a bond with every input at its default.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigurationError> {
        Self::builder(name).build()
    }

    /// Starts a builder for a bond.
    ///
    /// # Arguments
    /// * `name` - Object name, used to label attributes in errors (`"<name>.price"`)
    pub fn builder(name: impl Into<String>) -> BondBuilder {
        BondBuilder::new(name)
    }

    /// Builds a bond from loosely-typed terms.
    ///
    /// # Arguments
    /// * `name` - Object name
    /// * `terms` - Deserialised terms; absent or `null` fields take their defaults
    ///
    /// # Errors
    /// `ConfigurationError::InvalidInput` if a term is neither a number nor
    /// null. `frequency` additionally accepts names such as `"semi-annual"`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{Bond, BondTerms};
    /// use serde_json::json;
    ///
    /// let terms: BondTerms = serde_json::from_value(json!({
    ///     "face_value": 1000.0,
    ///     "yield_to_maturity": 0.02,
    ///     "maturity": 2.0,
    ///     "coupon_rate": 0.04,
    ///     "frequency": "semi-annual"
    /// }))
    /// .unwrap();
    /// let bond = Bond::from_terms("ust", &terms).unwrap();
    /// assert_eq!(bond.periods().unwrap(), 4.0);
    ///
    /// let bad: BondTerms = serde_json::from_value(json!({ "maturity": "soon" })).unwrap();
    /// assert!(Bond::from_terms("bad", &bad).is_err());
    /// ```
    pub fn from_terms(name: impl Into<String>, terms: &BondTerms) -> Result<Self, ConfigurationError> {
        let frequency = match &terms.frequency {
            Value::String(s) => s.parse::<Frequency>()?.into(),
            other => Input::from_json(FREQUENCY, other)?,
        };

        Self::builder(name)
            .face_value(Input::from_json(FACE_VALUE, &terms.face_value)?)
            .yield_to_maturity(Input::from_json(YIELD_TO_MATURITY, &terms.yield_to_maturity)?)
            .maturity(Input::from_json(MATURITY, &terms.maturity)?)
            .pricing_time(Input::from_json(PRICING_TIME, &terms.pricing_time)?)
            .coupon_rate(Input::from_json(COUPON_RATE, &terms.coupon_rate)?)
            .frequency(frequency)
            .build()
    }

    /// Face value F.
    pub fn face_value(&self) -> Result<f64, EvaluationError> {
        self.face_value.evaluate()
    }

    /// Yield to maturity Y, per coupon period.
    pub fn yield_to_maturity(&self) -> Result<f64, EvaluationError> {
        self.yield_to_maturity.evaluate()
    }

    /// Maturity T in years.
    pub fn maturity(&self) -> Result<f64, EvaluationError> {
        self.maturity.evaluate()
    }

    /// Pricing time T0 in years.
    pub fn pricing_time(&self) -> Result<f64, EvaluationError> {
        self.pricing_time.evaluate()
    }

    /// Annual coupon rate C.
    pub fn coupon_rate(&self) -> Result<f64, EvaluationError> {
        self.coupon_rate.evaluate()
    }

    /// Coupons per year M.
    pub fn frequency(&self) -> Result<f64, EvaluationError> {
        self.frequency.evaluate()
    }

    /// Remaining coupon periods n = (T − T0)·M.
    pub fn periods(&self) -> Result<f64, EvaluationError> {
        self.periods.evaluate()
    }

    /// Coupon paid per period.
    pub fn coupon_payment(&self) -> Result<f64, EvaluationError> {
        self.coupon_payment.evaluate()
    }

    /// Price Pt.
    pub fn price(&self) -> Result<f64, EvaluationError> {
        self.price.evaluate()
    }

    /// Macaulay duration in years.
    pub fn duration(&self) -> Result<f64, EvaluationError> {
        self.duration.evaluate()
    }

    /// Modified duration.
    pub fn modified_duration(&self) -> Result<f64, EvaluationError> {
        self.modified_duration.evaluate()
    }

    /// Convexity.
    pub fn convexity(&self) -> Result<f64, EvaluationError> {
        self.convexity.evaluate()
    }

    /// Second-order estimate of the price change for a yield shift `dy`.
    ///
    /// ΔP ≈ −Dm·P·dy + ½·Cov·P·dy²
    pub fn price_change_estimate(&self, dy: f64) -> Result<f64, EvaluationError> {
        let price = self.price.evaluate()?;
        let modified_duration = self.modified_duration.evaluate()?;
        let convexity = self.convexity.evaluate()?;
        Ok(-modified_duration * price * dy + 0.5 * convexity * price * dy * dy)
    }

    /// Rebinds the face value.
    pub fn set_face_value(&self, value: impl Into<Input>) {
        self.rebind(FACE_VALUE, value.into().resolve(DEFAULT_FACE_VALUE));
    }

    /// Rebinds the yield to maturity.
    pub fn set_yield_to_maturity(&self, value: impl Into<Input>) {
        self.rebind(YIELD_TO_MATURITY, value.into().resolve(DEFAULT_YIELD));
    }

    /// Rebinds the maturity.
    pub fn set_maturity(&self, value: impl Into<Input>) {
        self.rebind(MATURITY, value.into().resolve(DEFAULT_MATURITY));
    }

    /// Rebinds the pricing time.
    pub fn set_pricing_time(&self, value: impl Into<Input>) {
        self.rebind(PRICING_TIME, value.into().resolve(DEFAULT_PRICING_TIME));
    }

    /// Rebinds the coupon rate.
    pub fn set_coupon_rate(&self, value: impl Into<Input>) {
        self.rebind(COUPON_RATE, value.into().resolve(DEFAULT_COUPON_RATE));
    }

    /// Rebinds the coupon frequency.
    pub fn set_frequency(&self, value: impl Into<Input>) {
        self.rebind(FREQUENCY, value.into().resolve(DEFAULT_FREQUENCY));
    }

    fn rebind(&self, name: &str, computation: Computation) {
        if let Some(attribute) = self.object.attribute(name) {
            attribute.set(computation);
        }
    }
}

impl LazyObject for Bond {
    fn math_object(&self) -> &MathObject {
        &self.object
    }
}

impl Priceable for Bond {
    fn price(&self) -> Result<f64, EvaluationError> {
        Bond::price(self)
    }
}

/// Loosely-typed bond terms, as read from JSON or TOML.
///
/// Absent fields and `null` mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BondTerms {
    /// Face value F
    pub face_value: Value,
    /// Yield to maturity Y
    pub yield_to_maturity: Value,
    /// Maturity T
    pub maturity: Value,
    /// Pricing time T0
    pub pricing_time: Value,
    /// Coupon rate C
    pub coupon_rate: Value,
    /// Coupon frequency M (number or frequency name)
    pub frequency: Value,
}

/// Builder for [`Bond`].
///
/// Inputs not set fall back to their defaults.
#[derive(Debug, Default)]
pub struct BondBuilder {
    name: String,
    face_value: Input,
    yield_to_maturity: Input,
    maturity: Input,
    pricing_time: Input,
    coupon_rate: Input,
    frequency: Input,
}

impl BondBuilder {
    /// Creates a builder with every input absent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the face value.
    ///
    /// # Arguments
    /// * `value` - Constant, reference to another attribute, computation, or
    ///   `None` for the default of 100
    pub fn face_value(mut self, value: impl Into<Input>) -> Self {
        self.face_value = value.into();
        self
    }

    /// Sets the per-period yield to maturity.
    ///
    /// # Arguments
    /// * `value` - Yield Y per coupon period (default 0). At Y = −1 the
    ///   modified duration and convexity reads fail with `DivisionByZero`
    pub fn yield_to_maturity(mut self, value: impl Into<Input>) -> Self {
        self.yield_to_maturity = value.into();
        self
    }

    /// Sets the maturity in years (default 1).
    pub fn maturity(mut self, value: impl Into<Input>) -> Self {
        self.maturity = value.into();
        self
    }

    /// Sets the pricing time in years.
    pub fn pricing_time(mut self, value: impl Into<Input>) -> Self {
        self.pricing_time = value.into();
        self
    }

    /// Sets the annual coupon rate.
    pub fn coupon_rate(mut self, value: impl Into<Input>) -> Self {
        self.coupon_rate = value.into();
        self
    }

    /// Sets the number of coupons per year.
    ///
    /// # Arguments
    /// * `value` - Coupon frequency M (default 1); a [`Frequency`] converts directly
    pub fn frequency(mut self, value: impl Into<Input>) -> Self {
        self.frequency = value.into();
        self
    }

    /// Wires the attribute graph.
    ///
    /// Inputs are not evaluated here; invalid values surface on the first
    /// read that depends on them.
    pub fn build(self) -> Result<Bond, ConfigurationError> {
        let mut object = MathObject::new(self.name);

        let face_value = object.define(FACE_VALUE, self.face_value.resolve(DEFAULT_FACE_VALUE))?;
        let yield_to_maturity =
            object.define(YIELD_TO_MATURITY, self.yield_to_maturity.resolve(DEFAULT_YIELD))?;
        let maturity = object.define(MATURITY, self.maturity.resolve(DEFAULT_MATURITY))?;
        let pricing_time =
            object.define(PRICING_TIME, self.pricing_time.resolve(DEFAULT_PRICING_TIME))?;
        let coupon_rate =
            object.define(COUPON_RATE, self.coupon_rate.resolve(DEFAULT_COUPON_RATE))?;
        let frequency = object.define(FREQUENCY, self.frequency.resolve(DEFAULT_FREQUENCY))?;

        let periods = object.define(PERIODS, {
            let (t, t0, m) = (maturity.clone(), pricing_time.clone(), frequency.clone());
            computation(move || Ok((t.evaluate()? - t0.evaluate()?) * m.evaluate()?))
        })?;

        let coupon_payment = object.define(COUPON_PAYMENT, {
            let (c, f, m) = (coupon_rate.clone(), face_value.clone(), frequency.clone());
            let label = label(&object, COUPON_PAYMENT);
            computation(move || {
                checked_div(c.evaluate()? * f.evaluate()?, m.evaluate()?, &label, FREQUENCY)
            })
        })?;

        let price = object.define(PRICE, {
            let (f, y, n, cp) = (
                face_value.clone(),
                yield_to_maturity.clone(),
                periods.clone(),
                coupon_payment.clone(),
            );
            let label = label(&object, PRICE);
            computation(move || {
                let face = f.evaluate()?;
                let growth = 1.0 + y.evaluate()?;
                let n = finite_periods(n.evaluate()?, &label)?;
                let cp = cp.evaluate()?;

                let coupons: f64 = if cp > 0.0 {
                    coupon_periods(n).map(|i| cp / growth.powi(i)).sum()
                } else {
                    0.0
                };
                Ok(coupons + face / growth.powf(n))
            })
        })?;

        let duration = object.define(DURATION, {
            let (f, y, t, t0, m, n, cp, pt) = (
                face_value.clone(),
                yield_to_maturity.clone(),
                maturity.clone(),
                pricing_time.clone(),
                frequency.clone(),
                periods.clone(),
                coupon_payment.clone(),
                price.clone(),
            );
            let label = label(&object, DURATION);
            computation(move || {
                let face = f.evaluate()?;
                let growth = 1.0 + y.evaluate()?;
                let m = m.evaluate()?;
                let n = finite_periods(n.evaluate()?, &label)?;
                let cp = cp.evaluate()?;

                let coupons: f64 = if cp > 0.0 {
                    let mut sum = 0.0;
                    for i in coupon_periods(n) {
                        sum += cp / growth.powi(i) * checked_div(f64::from(i), m, &label, FREQUENCY)?;
                    }
                    sum
                } else {
                    0.0
                };
                let principal = face / growth.powf(n) * (t.evaluate()? - t0.evaluate()?);
                checked_div(coupons + principal, pt.evaluate()?, &label, PRICE)
            })
        })?;

        let modified_duration = object.define(MODIFIED_DURATION, {
            let (d, y) = (duration.clone(), yield_to_maturity.clone());
            let label = label(&object, MODIFIED_DURATION);
            computation(move || checked_div(d.evaluate()?, 1.0 + y.evaluate()?, &label, "1 + yield"))
        })?;

        let convexity = object.define(CONVEXITY, {
            let (f, y, n, cp, pt) = (
                face_value.clone(),
                yield_to_maturity.clone(),
                periods.clone(),
                coupon_payment.clone(),
                price.clone(),
            );
            let label = label(&object, CONVEXITY);
            computation(move || {
                let face = f.evaluate()?;
                let growth = 1.0 + y.evaluate()?;
                let discount_squared = checked_div(1.0, growth * growth, &label, "1 + yield")?;
                let n = finite_periods(n.evaluate()?, &label)?;
                let cp = cp.evaluate()?;

                let coupons: f64 = if cp > 0.0 {
                    coupon_periods(n)
                        .map(|i| {
                            let i_f = f64::from(i);
                            cp * i_f * (i_f + 1.0) / growth.powi(i)
                        })
                        .sum()
                } else {
                    0.0
                };
                let principal = face * n * (n + 1.0) / growth.powf(n);
                Ok(checked_div(coupons + principal, pt.evaluate()?, &label, PRICE)? * discount_squared)
            })
        })?;

        tracing::debug!(bond = %object.name(), attributes = object.len(), "Bond constructed");

        Ok(Bond {
            object,
            face_value,
            yield_to_maturity,
            maturity,
            pricing_time,
            coupon_rate,
            frequency,
            periods,
            coupon_payment,
            price,
            duration,
            modified_duration,
            convexity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn coupon_bond() -> Bond {
        Bond::builder("coupon")
            .face_value(1000.0)
            .yield_to_maturity(0.04)
            .maturity(3.0)
            .coupon_rate(0.05)
            .frequency(1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let bond = Bond::new("default").unwrap();
        assert_eq!(bond.face_value().unwrap(), 100.0);
        assert_eq!(bond.yield_to_maturity().unwrap(), 0.0);
        assert_eq!(bond.maturity().unwrap(), 1.0);
        assert_eq!(bond.pricing_time().unwrap(), 0.0);
        assert_eq!(bond.coupon_rate().unwrap(), 0.0);
        assert_eq!(bond.frequency().unwrap(), 1.0);
        assert_eq!(bond.periods().unwrap(), 1.0);
        assert_eq!(bond.price().unwrap(), 100.0);
        assert_eq!(bond.duration().unwrap(), 1.0);
    }

    #[test]
    fn test_attribute_names() {
        let bond = Bond::new("b").unwrap();
        let names: Vec<&str> = bond.math_object().attribute_names().collect();
        assert_eq!(
            names,
            vec![
                FACE_VALUE,
                YIELD_TO_MATURITY,
                MATURITY,
                PRICING_TIME,
                COUPON_RATE,
                FREQUENCY,
                PERIODS,
                COUPON_PAYMENT,
                PRICE,
                DURATION,
                MODIFIED_DURATION,
                CONVEXITY,
            ]
        );
    }

    #[test]
    fn test_coupon_payment() {
        assert_relative_eq!(coupon_bond().coupon_payment().unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coupon_periods_truncate() {
        assert_eq!(coupon_periods(2.5).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(coupon_periods(3.0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(coupon_periods(0.5).count(), 0);
        assert_eq!(coupon_periods(-1.0).count(), 0);
        assert_eq!(coupon_periods(f64::NAN).count(), 0);
    }

    #[test]
    fn test_fractional_periods_discount_principal_exactly() {
        let bond = Bond::builder("frac")
            .face_value(100.0)
            .yield_to_maturity(0.05)
            .maturity(2.5)
            .coupon_rate(0.1)
            .build()
            .unwrap();
        let g: f64 = 1.05;
        let expected = 10.0 / g + 10.0 / g.powi(2) + 100.0 / g.powf(2.5);
        assert_relative_eq!(bond.price().unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_coupon_skips_sum() {
        let bond = Bond::builder("neg")
            .face_value(100.0)
            .yield_to_maturity(0.1)
            .maturity(2.0)
            .coupon_rate(-0.05)
            .build()
            .unwrap();
        assert_relative_eq!(bond.price().unwrap(), 100.0 / 1.21, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_frequency_is_division_error() {
        let bond = coupon_bond();
        bond.set_frequency(0.0);
        assert!(matches!(
            bond.coupon_payment(),
            Err(EvaluationError::DivisionByZero { .. })
        ));
        bond.set_frequency(None::<f64>);
        assert_relative_eq!(bond.coupon_payment().unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_price_is_division_error() {
        let bond = Bond::builder("worthless").face_value(0.0).build().unwrap();
        assert_eq!(bond.price().unwrap(), 0.0);
        assert_eq!(
            bond.duration().unwrap_err(),
            EvaluationError::DivisionByZero {
                attribute: "worthless.duration".to_string(),
                denominator: PRICE.to_string(),
            }
        );
        assert!(bond.convexity().is_err());
        assert!(bond.modified_duration().is_err());

        bond.set_face_value(100.0);
        assert!(bond.duration().is_ok());
    }

    #[test]
    fn test_yield_of_minus_one_is_division_error() {
        let bond = coupon_bond();
        bond.set_yield_to_maturity(-1.0);
        assert_eq!(
            bond.modified_duration().unwrap_err(),
            EvaluationError::DivisionByZero {
                attribute: "coupon.modified_duration".to_string(),
                denominator: "1 + yield".to_string(),
            }
        );
        assert_eq!(
            bond.convexity().unwrap_err(),
            EvaluationError::DivisionByZero {
                attribute: "coupon.convexity".to_string(),
                denominator: "1 + yield".to_string(),
            }
        );

        bond.set_yield_to_maturity(0.04);
        let g: f64 = 1.04;
        let price = 50.0 / g + 50.0 / g.powi(2) + 1050.0 / g.powi(3);
        let duration = (50.0 / g + 100.0 / g.powi(2) + 3150.0 / g.powi(3)) / price;
        assert_relative_eq!(bond.modified_duration().unwrap(), duration / g, max_relative = 1e-12);
        assert!(bond.convexity().unwrap().is_finite());
    }

    #[test]
    fn test_period_count_beyond_index_range_rejected() {
        let bond = coupon_bond();
        bond.set_maturity(1e10);
        for read in [bond.price(), bond.duration(), bond.convexity()] {
            match read {
                Err(EvaluationError::ModelFailure { message, .. }) => {
                    assert!(message.contains("exceeds"));
                }
                other => panic!("expected ModelFailure, got {:?}", other),
            }
        }
        assert_eq!(bond.periods().unwrap(), 1e10);

        bond.set_maturity(3.0);
        assert!(bond.price().is_ok());
    }

    #[test]
    fn test_infinite_periods_rejected() {
        let bond = Bond::new("forever").unwrap();
        bond.set_maturity(f64::INFINITY);
        assert!(matches!(
            bond.price(),
            Err(EvaluationError::ModelFailure { .. })
        ));
    }

    #[test]
    fn test_price_change_estimate_tracks_reprice() {
        let bond = coupon_bond();
        let base = bond.price().unwrap();
        let estimate = bond.price_change_estimate(0.0001).unwrap();

        bond.set_yield_to_maturity(0.0401);
        let actual = bond.price().unwrap() - base;

        assert!(estimate < 0.0);
        assert_relative_eq!(estimate, actual, max_relative = 1e-3);
    }

    #[test]
    fn test_lazy_object_read() {
        let bond = coupon_bond();
        assert_eq!(bond.name(), "coupon");
        assert_eq!(
            bond.read(PRICE).unwrap(),
            bond.price().unwrap()
        );
    }

    #[test]
    fn test_from_terms_defaults() {
        let bond = Bond::from_terms("t", &BondTerms::default()).unwrap();
        assert_eq!(bond.price().unwrap(), 100.0);
    }

    #[test]
    fn test_from_terms_rejects_bool() {
        let terms = BondTerms {
            coupon_rate: Value::Bool(true),
            ..Default::default()
        };
        assert_eq!(
            Bond::from_terms("t", &terms).unwrap_err(),
            ConfigurationError::InvalidInput {
                attribute: COUPON_RATE.to_string(),
                found: "bool".to_string(),
            }
        );
    }

    #[test]
    fn test_from_terms_unknown_frequency_name() {
        let terms = BondTerms {
            frequency: Value::String("fortnightly".to_string()),
            ..Default::default()
        };
        assert!(Bond::from_terms("t", &terms).is_err());
    }
}
