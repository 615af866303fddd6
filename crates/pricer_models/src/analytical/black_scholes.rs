//! Black-Scholes leaf formulas for European options.
//!
//! With ω = +1 for a call and −1 for a put:
//!
//! - V = ω·[S·N(ω·d₁) − K·e^(−rT)·N(ω·d₂)]
//! - Δ = ω·N(ω·d₁)
//! - ν = S·√T·φ(d₁)
//!
//! where d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ − σ√T. Once the
//! option has expired (T ≤ 1e-10) the payoff is intrinsic and ν = 0.

use super::distributions::{norm_cdf, norm_pdf};
use super::error::{positive, AnalyticalError, Parameter};
use crate::instruments::OptionKind;

/// Expiries at or below this are treated as expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Quantities shared by every formula at one strike and expiry.
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    discount: f64,
}

/// Black-Scholes model with validated market inputs.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionKind;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionKind::Call);
/// let put = bs.price(100.0, 1.0, OptionKind::Put);
///
/// // C − P = S − K·e^(−rT)
/// assert!((call - put - (100.0 - 100.0 * (-0.05_f64).exp())).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Validates spot and volatility.
    ///
    /// # Errors
    /// `AnalyticalError::NonPositive` unless both are strictly positive.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        Ok(Self {
            spot: positive(Parameter::Spot, spot)?,
            rate,
            volatility: positive(Parameter::Volatility, volatility)?,
        })
    }

    /// Rejects non-positive (or NaN) strikes.
    pub fn validate_strike(strike: f64) -> Result<(), AnalyticalError> {
        positive(Parameter::Strike, strike).map(|_| ())
    }

    /// Spot S.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Rate r.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility σ.
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    fn terms(&self, strike: f64, expiry: f64) -> Option<Terms> {
        if expiry <= EXPIRY_EPSILON {
            return None;
        }
        let sqrt_t = expiry.sqrt();
        let total_vol = self.volatility * sqrt_t;
        let d1 = ((self.spot / strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * expiry)
            / total_vol;
        Some(Terms {
            d1,
            d2: d1 - total_vol,
            sqrt_t,
            discount: (-self.rate * expiry).exp(),
        })
    }

    /// Premium of a call or put.
    pub fn price(&self, strike: f64, expiry: f64, kind: OptionKind) -> f64 {
        let w = kind.sign();
        match self.terms(strike, expiry) {
            Some(t) => {
                w * (self.spot * norm_cdf(w * t.d1) - strike * t.discount * norm_cdf(w * t.d2))
            }
            None => (w * (self.spot - strike)).max(0.0),
        }
    }

    /// ∂V/∂S.
    ///
    /// At expiry: ω when in the money, 0 otherwise (including at the money).
    pub fn delta(&self, strike: f64, expiry: f64, kind: OptionKind) -> f64 {
        let w = kind.sign();
        match self.terms(strike, expiry) {
            Some(t) => w * norm_cdf(w * t.d1),
            None if w * (self.spot - strike) > 0.0 => w,
            None => 0.0,
        }
    }

    /// ∂V/∂σ, identical for calls and puts.
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        self.terms(strike, expiry)
            .map_or(0.0, |t| self.spot * t.sqrt_t * norm_pdf(t.d1))
    }
}
