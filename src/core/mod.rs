//! Core domain types, the Greeks container, and the library-wide error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod serialization;
pub mod types;

pub use serialization::{BookSnapshot, RiskReport, from_json, to_json_pretty};
pub use types::*;

/// Per-unit valuation bundle for one option under one pricing context.
///
/// Units follow the reporting conventions of the pricer:
/// - `price`: currency per unit of underlying,
/// - `delta`: change in price for a 1.0 move in spot,
/// - `gamma`: change in delta for a 1.0 move in spot,
/// - `vega`: change in price for a +1 vol point (0.01) move,
/// - `theta`: change in price per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
}

/// Result alias used across the crate.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors surfaced by instrument construction, pricing, aggregation, and estimation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A construction invariant of an instrument was violated.
    #[error("invalid instrument: {0}")]
    InvalidInstrument(String),
    /// A per-call override produced an unusable pricing input.
    ///
    /// The stored instrument stays valid.
    #[error("invalid pricing input: {0}")]
    InvalidPricingInput(String),
    /// A normalized portfolio metric was requested with a zero reference value.
    #[error("degenerate portfolio: {0}")]
    DegeneratePortfolio(String),
    /// A price series or estimator configuration is unusable.
    #[error("invalid series: {0}")]
    InvalidSeries(String),
}

impl PricingError {
    #[must_use]
    pub fn is_invalid_instrument(&self) -> bool {
        matches!(self, Self::InvalidInstrument(_))
    }

    #[must_use]
    pub fn is_invalid_pricing_input(&self) -> bool {
        matches!(self, Self::InvalidPricingInput(_))
    }

    #[must_use]
    pub fn is_degenerate_portfolio(&self) -> bool {
        matches!(self, Self::DegeneratePortfolio(_))
    }

    #[must_use]
    pub fn is_invalid_series(&self) -> bool {
        matches!(self, Self::InvalidSeries(_))
    }

    /// Returns the error detail without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInstrument(msg)
            | Self::InvalidPricingInput(msg)
            | Self::DegeneratePortfolio(msg)
            | Self::InvalidSeries(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_kind_prefix() {
        let err = PricingError::DegeneratePortfolio("portfolio value is zero".to_string());
        assert_eq!(err.to_string(), "degenerate portfolio: portfolio value is zero");
        assert_eq!(err.message(), "portfolio value is zero");
    }

    #[test]
    fn kind_predicates_are_exclusive() {
        let err = PricingError::InvalidPricingInput("days".to_string());
        assert!(err.is_invalid_pricing_input());
        assert!(!err.is_invalid_instrument());
        assert!(!err.is_degenerate_portfolio());
        assert!(!err.is_invalid_series());
    }
}
