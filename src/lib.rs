//! greekbook prices European options under Black-Scholes with a continuous dividend
//! yield, derives their Greeks, and aggregates them across a book of options and
//! forwards into normalized portfolio risk figures. A separate estimator turns a dated
//! close series into month-end rolling realized volatility.
//!
//! Conventions used throughout:
//! - maturity is an integer number of calendar days, converted with actual/365,
//! - vega is quoted per vol point and theta per calendar day,
//! - book delta is exposure as a fraction of portfolio value, gamma is its change for a
//!   1% move, vega and theta are basis points of portfolio value.
//!
//! References: Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 15 and 19.
//!
//! # Feature Flags
//! - `parallel`: evaluates per-entry Greeks on the Rayon pool; sums are still reduced in
//!   insertion order, so results match the serial build exactly.
//!
//! # Quick Start
//! Price a call and read its Greeks:
//! ```rust
//! use greekbook::core::OptionType;
//! use greekbook::instruments::OptionInstrument;
//!
//! let call = OptionInstrument::new(OptionType::Call, 100.0, 110.0, 0.05, 0.02, 30, 0.20).unwrap();
//! let g = call.greeks().unwrap();
//! assert!(g.price > 0.0 && g.delta > 0.0 && g.gamma > 0.0 && g.vega > 0.0);
//! ```
//!
//! What-if pricing without touching the instrument:
//! ```rust
//! use greekbook::core::OptionType;
//! use greekbook::instruments::OptionInstrument;
//! use greekbook::pricing::PricingOverrides;
//!
//! let put = OptionInstrument::new(OptionType::Put, 100.0, 95.0, 0.03, 0.0, 60, 0.25).unwrap();
//! let crash = PricingOverrides::new().underlying_price(80.0).implied_volatility(0.45);
//! assert!(put.price_with(&crash).unwrap() > put.price().unwrap());
//! ```
//!
//! Aggregate a book:
//! ```rust
//! use greekbook::core::OptionType;
//! use greekbook::instruments::{ForwardInstrument, OptionInstrument};
//! use greekbook::risk::Portfolio;
//!
//! let mut book = Portfolio::new(1_000_000.0);
//! book.add_option(
//!     OptionInstrument::new(OptionType::Call, 100.0, 110.0, 0.05, 0.02, 30, 0.20).unwrap(),
//!     100.0,
//!     1.0,
//! );
//! book.add_forward(ForwardInstrument::new(100.0).unwrap(), 50.0, 1.0);
//!
//! let risk = book.risk_summary().unwrap();
//! assert!(risk.delta > 0.005 && risk.theta < 0.0);
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod math;
pub mod pricing;
pub mod risk;
pub mod vol;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{Greeks, OptionType, PricingError, PricingResult};
    pub use crate::instruments::{ForwardInstrument, OptionInstrument};
    pub use crate::pricing::{PricingContext, PricingOverrides};
    pub use crate::risk::{Portfolio, PortfolioEntry, RiskSummary};
    pub use crate::vol::{RealizedVolEstimator, RollingVolConfig};
}
