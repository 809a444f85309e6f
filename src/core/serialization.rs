//! Serde payloads for persisting books and their risk reports.
//!
//! Instruments deserialize through their validating constructors, so a JSON
//! payload can never produce an instrument that violates its invariants.
//!
//! # Examples
//! ```rust
//! use chrono::NaiveDate;
//! use greekbook::core::{from_json, to_json_pretty, BookSnapshot, OptionType};
//! use greekbook::instruments::{ForwardInstrument, OptionInstrument};
//! use greekbook::risk::Portfolio;
//!
//! let mut portfolio = Portfolio::new(1_000_000.0);
//! portfolio.add_option(
//!     OptionInstrument::new(OptionType::Call, 100.0, 110.0, 0.05, 0.02, 30, 0.20).unwrap(),
//!     100.0,
//!     1.0,
//! );
//! portfolio.add_forward(ForwardInstrument::new(100.0).unwrap(), 50.0, 1.0);
//!
//! let snapshot = BookSnapshot {
//!     book_id: "BOOK-001".to_string(),
//!     as_of: NaiveDate::from_ymd_opt(2024, 3, 29).unwrap(),
//!     portfolio,
//! };
//!
//! let json = to_json_pretty(&snapshot).expect("json serialization");
//! let decoded: BookSnapshot = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, snapshot);
//! ```

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::core::PricingResult;
use crate::risk::{Portfolio, RiskSummary};

/// A named book as of a valuation date.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookSnapshot {
    pub book_id: String,
    pub as_of: NaiveDate,
    pub portfolio: Portfolio,
}

impl BookSnapshot {
    /// Aggregates the book into a report stamped with the snapshot identity.
    pub fn risk_report(&self) -> PricingResult<RiskReport> {
        Ok(RiskReport {
            book_id: self.book_id.clone(),
            as_of: self.as_of,
            portfolio_value: self.portfolio.portfolio_value(),
            summary: self.portfolio.risk_summary()?,
        })
    }
}

/// Aggregated figures for one book, ready for external reporting.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskReport {
    pub book_id: String,
    pub as_of: NaiveDate,
    pub portfolio_value: f64,
    pub summary: RiskSummary,
}

/// Serialize a value to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}
