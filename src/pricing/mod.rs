//! Per-call pricing inputs.
//!
//! A [`PricingContext`] is the immutable merge of an instrument's stored terms and the
//! caller's [`PricingOverrides`]. The Black-Scholes kernels only ever see a context, so
//! scenario pricing never mutates the instrument it starts from.

use crate::core::{OptionType, PricingError, PricingResult};
use crate::instruments::OptionInstrument;

/// Actual/365 day-count denominator, also used to express theta per calendar day.
pub const DAYS_IN_YEAR: f64 = 365.0;

/// Optional replacements for spot, maturity and volatility on a single pricing call.
///
/// # Examples
/// ```
/// use greekbook::core::OptionType;
/// use greekbook::instruments::OptionInstrument;
/// use greekbook::pricing::PricingOverrides;
///
/// let call = OptionInstrument::new(OptionType::Call, 100.0, 100.0, 0.03, 0.0, 90, 0.25).unwrap();
/// let shocked = PricingOverrides::new().underlying_price(95.0).implied_volatility(0.30);
///
/// let base = call.price().unwrap();
/// let what_if = call.price_with(&shocked).unwrap();
/// assert!(what_if != base);
/// assert_eq!(call.underlying_price(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingOverrides {
    underlying_price: Option<f64>,
    time_to_maturity_days: Option<i64>,
    implied_volatility: Option<f64>,
}

impl PricingOverrides {
    /// Empty override set: prices from the instrument's stored terms only.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn underlying_price(mut self, underlying_price: f64) -> Self {
        self.underlying_price = Some(underlying_price);
        self
    }

    #[inline]
    pub fn time_to_maturity_days(mut self, days: i64) -> Self {
        self.time_to_maturity_days = Some(days);
        self
    }

    #[inline]
    pub fn implied_volatility(mut self, vol: f64) -> Self {
        self.implied_volatility = Some(vol);
        self
    }

    /// True when no field is overridden.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.underlying_price.is_none()
            && self.time_to_maturity_days.is_none()
            && self.implied_volatility.is_none()
    }
}

/// Fully resolved Black-Scholes inputs for one pricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingContext {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    days: i64,
    vol: f64,
}

impl PricingContext {
    /// Merges instrument terms with overrides and validates the result.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidPricingInput`] when the effective maturity is
    /// `<= 0` days, or the effective spot or volatility is not finite and `> 0`.
    pub fn resolve(
        instrument: &OptionInstrument,
        overrides: &PricingOverrides,
    ) -> PricingResult<Self> {
        let spot = overrides
            .underlying_price
            .unwrap_or_else(|| instrument.underlying_price());
        let days = overrides
            .time_to_maturity_days
            .unwrap_or_else(|| instrument.time_to_maturity_days());
        let vol = overrides
            .implied_volatility
            .unwrap_or_else(|| instrument.implied_volatility());

        if days <= 0 {
            return Err(PricingError::InvalidPricingInput(format!(
                "time to maturity must be > 0 days, got {days}"
            )));
        }
        if !(vol.is_finite() && vol > 0.0) {
            return Err(PricingError::InvalidPricingInput(format!(
                "implied volatility must be finite and > 0, got {vol}"
            )));
        }
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::InvalidPricingInput(format!(
                "underlying price must be finite and > 0, got {spot}"
            )));
        }

        Ok(Self {
            option_type: instrument.option_type(),
            spot,
            strike: instrument.strike_price(),
            rate: instrument.risk_free_rate(),
            dividend_yield: instrument.dividend_yield(),
            days,
            vol,
        })
    }

    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    #[inline]
    pub fn days(&self) -> i64 {
        self.days
    }

    #[inline]
    pub fn vol(&self) -> f64 {
        self.vol
    }

    /// Time to maturity in years, `days / 365`.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.days as f64 / DAYS_IN_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put() -> OptionInstrument {
        OptionInstrument::new(OptionType::Put, 50.0, 55.0, 0.01, 0.0, 73, 0.4).unwrap()
    }

    #[test]
    fn resolve_without_overrides_uses_instrument_terms() {
        let ctx = PricingContext::resolve(&put(), &PricingOverrides::new()).unwrap();
        assert_eq!(ctx.option_type(), OptionType::Put);
        assert_eq!(ctx.spot(), 50.0);
        assert_eq!(ctx.strike(), 55.0);
        assert_eq!(ctx.days(), 73);
        assert_eq!(ctx.expiry(), 0.2);
        assert_eq!(ctx.vol(), 0.4);
    }

    #[test]
    fn overrides_replace_only_what_they_name() {
        let ctx =
            PricingContext::resolve(&put(), &PricingOverrides::new().implied_volatility(0.25))
                .unwrap();
        assert_eq!(ctx.vol(), 0.25);
        assert_eq!(ctx.spot(), 50.0);
        assert_eq!(ctx.days(), 73);
        assert!(PricingOverrides::new().is_empty());
        assert!(!PricingOverrides::new().underlying_price(1.0).is_empty());
    }

    #[test]
    fn rejects_non_positive_overrides() {
        let bad = [
            PricingOverrides::new().time_to_maturity_days(0),
            PricingOverrides::new().time_to_maturity_days(-10),
            PricingOverrides::new().implied_volatility(0.0),
            PricingOverrides::new().implied_volatility(-0.1),
            PricingOverrides::new().underlying_price(0.0),
            PricingOverrides::new().underlying_price(f64::NAN),
        ];
        for overrides in bad {
            let err = PricingContext::resolve(&put(), &overrides).unwrap_err();
            assert!(err.is_invalid_pricing_input(), "{overrides:?}");
        }
    }
}
