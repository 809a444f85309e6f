//! Plain-vanilla European option contract with its own market snapshot.
//!
//! [`OptionInstrument`] carries everything the Black-Scholes pricer needs: side,
//! spot, strike, flat rate and dividend yield, calendar days to maturity, and implied
//! volatility. It is validated once at construction and never mutated afterwards;
//! what-if pricing goes through [`PricingOverrides`] instead.

use serde::{Deserialize, Serialize};

use crate::core::{Greeks, OptionType, PricingError, PricingResult};
use crate::engines::analytic::black_scholes;
use crate::pricing::{PricingContext, PricingOverrides};

/// Vanilla option contract.
///
/// # Examples
/// ```
/// use greekbook::core::OptionType;
/// use greekbook::instruments::OptionInstrument;
///
/// let call = OptionInstrument::new(OptionType::Call, 100.0, 110.0, 0.05, 0.02, 30, 0.20).unwrap();
/// assert_eq!(call.time_to_maturity_days(), 30);
/// assert!(call.price().unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OptionTerms", into = "OptionTerms")]
pub struct OptionInstrument {
    option_type: OptionType,
    underlying_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    time_to_maturity_days: i64,
    implied_volatility: f64,
}

/// Unvalidated wire form of [`OptionInstrument`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OptionTerms {
    option_type: OptionType,
    underlying_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    time_to_maturity_days: i64,
    implied_volatility: f64,
}

impl TryFrom<OptionTerms> for OptionInstrument {
    type Error = PricingError;

    fn try_from(terms: OptionTerms) -> Result<Self, Self::Error> {
        Self::new(
            terms.option_type,
            terms.underlying_price,
            terms.strike_price,
            terms.risk_free_rate,
            terms.dividend_yield,
            terms.time_to_maturity_days,
            terms.implied_volatility,
        )
    }
}

impl From<OptionInstrument> for OptionTerms {
    fn from(option: OptionInstrument) -> Self {
        Self {
            option_type: option.option_type,
            underlying_price: option.underlying_price,
            strike_price: option.strike_price,
            risk_free_rate: option.risk_free_rate,
            dividend_yield: option.dividend_yield,
            time_to_maturity_days: option.time_to_maturity_days,
            implied_volatility: option.implied_volatility,
        }
    }
}

impl OptionInstrument {
    /// Builds a validated option.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInstrument`] when:
    /// - `underlying_price`, `strike_price` or `implied_volatility` is not finite and `> 0`
    /// - `time_to_maturity_days <= 0`
    /// - `risk_free_rate` or `dividend_yield` is not finite (negative values are allowed)
    pub fn new(
        option_type: OptionType,
        underlying_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
        time_to_maturity_days: i64,
        implied_volatility: f64,
    ) -> PricingResult<Self> {
        let option = Self {
            option_type,
            underlying_price,
            strike_price,
            risk_free_rate,
            dividend_yield,
            time_to_maturity_days,
            implied_volatility,
        };
        option.validate()?;
        Ok(option)
    }

    /// Builds a validated option from a textual side, `"Call"` or `"Put"`.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInstrument`] for any other label, or when the
    /// numeric invariants of [`OptionInstrument::new`] are violated.
    pub fn from_kind(
        kind: &str,
        underlying_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
        time_to_maturity_days: i64,
        implied_volatility: f64,
    ) -> PricingResult<Self> {
        Self::new(
            kind.parse()?,
            underlying_price,
            strike_price,
            risk_free_rate,
            dividend_yield,
            time_to_maturity_days,
            implied_volatility,
        )
    }

    fn validate(&self) -> PricingResult<()> {
        if !(self.underlying_price.is_finite() && self.underlying_price > 0.0) {
            return Err(PricingError::InvalidInstrument(
                "underlying price must be finite and > 0".to_string(),
            ));
        }
        if !(self.strike_price.is_finite() && self.strike_price > 0.0) {
            return Err(PricingError::InvalidInstrument(
                "strike price must be finite and > 0".to_string(),
            ));
        }
        if self.time_to_maturity_days <= 0 {
            return Err(PricingError::InvalidInstrument(
                "time to maturity must be > 0 days".to_string(),
            ));
        }
        if !(self.implied_volatility.is_finite() && self.implied_volatility > 0.0) {
            return Err(PricingError::InvalidInstrument(
                "implied volatility must be finite and > 0".to_string(),
            ));
        }
        if !self.risk_free_rate.is_finite() || !self.dividend_yield.is_finite() {
            return Err(PricingError::InvalidInstrument(
                "risk-free rate and dividend yield must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    pub fn time_to_maturity_days(&self) -> i64 {
        self.time_to_maturity_days
    }

    pub fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }

    /// Merges the stored terms with per-call overrides.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidPricingInput`] when an override is unusable.
    pub fn context(&self, overrides: &PricingOverrides) -> PricingResult<PricingContext> {
        PricingContext::resolve(self, overrides)
    }

    /// Black-Scholes fair value from the stored terms.
    pub fn price(&self) -> PricingResult<f64> {
        self.price_with(&PricingOverrides::new())
    }

    /// Delta from the stored terms.
    pub fn delta(&self) -> PricingResult<f64> {
        self.delta_with(&PricingOverrides::new())
    }

    /// Gamma from the stored terms.
    pub fn gamma(&self) -> PricingResult<f64> {
        self.gamma_with(&PricingOverrides::new())
    }

    /// Vega per vol point from the stored terms.
    pub fn vega(&self) -> PricingResult<f64> {
        self.vega_with(&PricingOverrides::new())
    }

    /// Theta per calendar day from the stored terms.
    pub fn theta(&self) -> PricingResult<f64> {
        self.theta_with(&PricingOverrides::new())
    }

    /// Price and all Greeks from the stored terms.
    pub fn greeks(&self) -> PricingResult<Greeks> {
        self.greeks_with(&PricingOverrides::new())
    }

    pub fn price_with(&self, overrides: &PricingOverrides) -> PricingResult<f64> {
        Ok(black_scholes::price(&self.context(overrides)?))
    }

    pub fn delta_with(&self, overrides: &PricingOverrides) -> PricingResult<f64> {
        Ok(black_scholes::delta(&self.context(overrides)?))
    }

    pub fn gamma_with(&self, overrides: &PricingOverrides) -> PricingResult<f64> {
        Ok(black_scholes::gamma(&self.context(overrides)?))
    }

    pub fn vega_with(&self, overrides: &PricingOverrides) -> PricingResult<f64> {
        Ok(black_scholes::vega(&self.context(overrides)?))
    }

    pub fn theta_with(&self, overrides: &PricingOverrides) -> PricingResult<f64> {
        Ok(black_scholes::theta(&self.context(overrides)?))
    }

    pub fn greeks_with(&self, overrides: &PricingOverrides) -> PricingResult<Greeks> {
        Ok(black_scholes::greeks(&self.context(overrides)?))
    }
}
