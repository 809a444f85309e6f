//! Portfolio risk aggregation.
//!
//! The book lives in [`portfolio`]; this file only defines the public import surface
//! (`greekbook::risk::*`).

pub mod portfolio;

pub use portfolio::{Portfolio, PortfolioEntry, RiskSummary};
