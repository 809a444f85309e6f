//! Book-level aggregation of option and forward exposures.
//!
//! Figures are normalized by the portfolio's reference value and quoted in reporting
//! units:
//! - delta: underlying exposure as a fraction of portfolio value
//!   (per-unit delta × spot / value),
//! - gamma: change of that delta exposure for a 1% move (per-unit gamma × spot² / 100 / value),
//! - vega: basis points of portfolio value per +1 vol point,
//! - theta: basis points of portfolio value per calendar day.
//!
//! Each query re-walks the whole book and sums in insertion order (options first,
//! then forwards), so results are reproducible bit for bit.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{PricingError, PricingResult};
use crate::instruments::{ForwardInstrument, OptionInstrument};
use crate::pricing::PricingOverrides;

/// Gamma scaling to a 1% move in the underlying.
const PERCENT: f64 = 100.0;
/// Vega/theta scaling to basis points.
const BASIS_POINTS: f64 = 10_000.0;

/// Normalized portfolio-level risk figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Total option premium in currency.
    pub premium: f64,
    pub delta: f64,
    pub gamma: f64,
    /// Basis points of portfolio value per vol point.
    pub vega: f64,
    /// Basis points of portfolio value per calendar day.
    pub theta: f64,
}

/// One holding: an instrument snapshot, a signed quantity, and units per contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry<I> {
    pub instrument: I,
    /// Positive for long, negative for short.
    pub quantity: f64,
    /// Units of underlying per contract.
    pub contract_size: f64,
}

impl<I> PortfolioEntry<I> {
    /// # Panics
    /// Panics if `quantity` is not finite or `contract_size` is not finite and `> 0`.
    pub fn new(instrument: I, quantity: f64, contract_size: f64) -> Self {
        assert!(quantity.is_finite(), "quantity must be finite");
        assert!(
            contract_size.is_finite() && contract_size > 0.0,
            "contract_size must be finite and > 0"
        );
        Self {
            instrument,
            quantity,
            contract_size,
        }
    }
}

/// Append-only book of options and forwards with a reference value.
///
/// # Examples
/// ```rust
/// use greekbook::core::OptionType;
/// use greekbook::instruments::{ForwardInstrument, OptionInstrument};
/// use greekbook::risk::Portfolio;
///
/// let call = OptionInstrument::new(OptionType::Call, 100.0, 110.0, 0.05, 0.02, 30, 0.20).unwrap();
/// let mut book = Portfolio::new(1_000_000.0);
/// book.add_option(call.clone(), 100.0, 1.0);
/// book.add_forward(ForwardInstrument::new(100.0).unwrap(), 50.0, 1.0);
///
/// let expected = call.delta().unwrap() * 100.0 * 1.0 * 100.0 / 1_000_000.0
///     + 50.0 * 1.0 * 100.0 / 1_000_000.0;
/// assert_eq!(book.total_delta().unwrap(), expected);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    portfolio_value: f64,
    options: Vec<PortfolioEntry<OptionInstrument>>,
    forwards: Vec<PortfolioEntry<ForwardInstrument>>,
}

impl Portfolio {
    /// Creates an empty book.
    ///
    /// Any value is accepted here; normalized queries fail with
    /// [`PricingError::DegeneratePortfolio`] if it is zero.
    pub fn new(portfolio_value: f64) -> Self {
        Self {
            portfolio_value,
            options: Vec::new(),
            forwards: Vec::new(),
        }
    }

    pub fn portfolio_value(&self) -> f64 {
        self.portfolio_value
    }

    pub fn options(&self) -> &[PortfolioEntry<OptionInstrument>] {
        &self.options
    }

    pub fn forwards(&self) -> &[PortfolioEntry<ForwardInstrument>] {
        &self.forwards
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.forwards.is_empty()
    }

    /// Appends an option holding.
    ///
    /// # Panics
    /// Panics if `quantity` is not finite or `contract_size` is not finite and `> 0`.
    pub fn add_option(&mut self, option: OptionInstrument, quantity: f64, contract_size: f64) {
        self.options
            .push(PortfolioEntry::new(option, quantity, contract_size));
    }

    /// Appends a forward holding.
    ///
    /// # Panics
    /// Panics under the same conditions as [`Portfolio::add_option`].
    pub fn add_forward(&mut self, forward: ForwardInstrument, quantity: f64, contract_size: f64) {
        self.forwards
            .push(PortfolioEntry::new(forward, quantity, contract_size));
    }

    /// Denominator for normalized figures.
    fn normalizer(&self) -> PricingResult<f64> {
        if self.portfolio_value == 0.0 || !self.portfolio_value.is_finite() {
            return Err(PricingError::DegeneratePortfolio(format!(
                "portfolio value must be finite and non-zero, got {}",
                self.portfolio_value
            )));
        }
        Ok(self.portfolio_value)
    }

    /// Sums one term per option entry in insertion order.
    ///
    /// With the `parallel` feature the terms are evaluated on the rayon pool and then
    /// reduced sequentially, so the result is identical to the serial path.
    fn sum_options<F>(&self, term: F) -> PricingResult<f64>
    where
        F: Fn(&PortfolioEntry<OptionInstrument>) -> PricingResult<f64> + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        {
            let terms = self
                .options
                .par_iter()
                .map(&term)
                .collect::<PricingResult<Vec<f64>>>()?;
            Ok(terms.into_iter().fold(0.0, |acc, x| acc + x))
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.options
                .iter()
                .try_fold(0.0, |acc, entry| -> PricingResult<f64> { Ok(acc + term(entry)?) })
        }
    }

    /// Adds each forward's delta term to `start`, in insertion order.
    fn accumulate_forward_delta(&self, start: f64, value: f64) -> f64 {
        self.forwards.iter().fold(start, |acc, entry| {
            acc + entry.quantity * entry.contract_size * entry.instrument.underlying_price() / value
        })
    }

    /// Total option premium in currency: Σ price × quantity × contract size.
    ///
    /// Not normalized, so it does not depend on the portfolio value.
    pub fn total_premium(&self) -> PricingResult<f64> {
        let premium = self.sum_options(|e| {
            Ok(e.instrument.price()? * e.quantity * e.contract_size)
        })?;
        trace!(options = self.options.len(), premium, "aggregated premium");
        Ok(premium)
    }

    /// Delta exposure as a fraction of portfolio value, options then forwards.
    pub fn total_delta(&self) -> PricingResult<f64> {
        let value = self.normalizer()?;
        let options = self.sum_options(|e| {
            Ok(e.instrument.delta()?
                * e.quantity
                * e.contract_size
                * e.instrument.underlying_price()
                / value)
        })?;
        let delta = self.accumulate_forward_delta(options, value);
        trace!(
            options = self.options.len(),
            forwards = self.forwards.len(),
            delta,
            "aggregated delta"
        );
        Ok(delta)
    }

    /// Change of the delta exposure for a 1% move in every underlying.
    pub fn total_gamma(&self) -> PricingResult<f64> {
        let value = self.normalizer()?;
        let gamma = self.sum_options(|e| {
            Ok(e.instrument.gamma()?
                * e.quantity
                * e.contract_size
                * e.instrument.underlying_price().powi(2)
                / PERCENT
                / value)
        })?;
        trace!(options = self.options.len(), gamma, "aggregated gamma");
        Ok(gamma)
    }

    /// Basis points of portfolio value per +1 vol point.
    pub fn total_vega(&self) -> PricingResult<f64> {
        let value = self.normalizer()?;
        let vega = self.sum_options(|e| {
            Ok(e.instrument.vega()? * e.quantity * e.contract_size * BASIS_POINTS / value)
        })?;
        trace!(options = self.options.len(), vega, "aggregated vega");
        Ok(vega)
    }

    /// Basis points of portfolio value decayed per calendar day.
    pub fn total_theta(&self) -> PricingResult<f64> {
        let value = self.normalizer()?;
        let theta = self.sum_options(|e| {
            Ok(e.instrument.theta()? * e.quantity * e.contract_size * BASIS_POINTS / value)
        })?;
        trace!(options = self.options.len(), theta, "aggregated theta");
        Ok(theta)
    }

    /// All five figures from one pass over the book.
    ///
    /// Per-entry terms and summation order match the individual queries, so each field
    /// equals its standalone counterpart exactly.
    pub fn risk_summary(&self) -> PricingResult<RiskSummary> {
        let value = self.normalizer()?;

        #[cfg(feature = "parallel")]
        let per_option = self
            .options
            .par_iter()
            .map(|e| e.instrument.greeks().map(|g| (e, g)))
            .collect::<PricingResult<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let per_option = self
            .options
            .iter()
            .map(|e| e.instrument.greeks().map(|g| (e, g)))
            .collect::<PricingResult<Vec<_>>>()?;

        let mut summary = RiskSummary::default();
        for (e, g) in per_option {
            let spot = e.instrument.underlying_price();
            summary.premium += g.price * e.quantity * e.contract_size;
            summary.delta += g.delta * e.quantity * e.contract_size * spot / value;
            summary.gamma +=
                g.gamma * e.quantity * e.contract_size * spot.powi(2) / PERCENT / value;
            summary.vega += g.vega * e.quantity * e.contract_size * BASIS_POINTS / value;
            summary.theta += g.theta * e.quantity * e.contract_size * BASIS_POINTS / value;
        }
        summary.delta = self.accumulate_forward_delta(summary.delta, value);

        debug!(
            options = self.options.len(),
            forwards = self.forwards.len(),
            portfolio_value = value,
            premium = summary.premium,
            delta = summary.delta,
            gamma = summary.gamma,
            vega = summary.vega,
            theta = summary.theta,
            "computed portfolio risk summary"
        );
        Ok(summary)
    }

    /// Full-revaluation premium with every option's spot scaled by `1 + spot_shift_pct`
    /// and implied vol shifted by `vol_shift` (absolute, e.g. `0.01` for +1 point).
    ///
    /// Stored instruments are untouched.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidPricingInput`] if a shift drives any option's
    /// spot or vol to a non-positive value.
    pub fn scenario_premium(&self, spot_shift_pct: f64, vol_shift: f64) -> PricingResult<f64> {
        let premium = self.sum_options(|e| {
            let overrides = PricingOverrides::new()
                .underlying_price(e.instrument.underlying_price() * (1.0 + spot_shift_pct))
                .implied_volatility(e.instrument.implied_volatility() + vol_shift);
            Ok(e.instrument.price_with(&overrides)? * e.quantity * e.contract_size)
        })?;
        debug!(spot_shift_pct, vol_shift, premium, "revalued scenario premium");
        Ok(premium)
    }
}
