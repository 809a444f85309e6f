//! Linear forward contract on a single underlying.

use serde::{Deserialize, Serialize};

use crate::core::{PricingError, PricingResult};

/// Forward contract.
///
/// Its exposure is linear in the underlying, so it has no pricer; the aggregator
/// reads `underlying_price` directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForwardTerms", into = "ForwardTerms")]
pub struct ForwardInstrument {
    underlying_price: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ForwardTerms {
    underlying_price: f64,
}

impl TryFrom<ForwardTerms> for ForwardInstrument {
    type Error = PricingError;

    fn try_from(terms: ForwardTerms) -> Result<Self, Self::Error> {
        Self::new(terms.underlying_price)
    }
}

impl From<ForwardInstrument> for ForwardTerms {
    fn from(forward: ForwardInstrument) -> Self {
        Self {
            underlying_price: forward.underlying_price,
        }
    }
}

impl ForwardInstrument {
    /// # Errors
    /// Returns [`PricingError::InvalidInstrument`] unless `underlying_price` is finite and `> 0`.
    pub fn new(underlying_price: f64) -> PricingResult<Self> {
        if !(underlying_price.is_finite() && underlying_price > 0.0) {
            return Err(PricingError::InvalidInstrument(
                "forward underlying price must be finite and > 0".to_string(),
            ));
        }
        Ok(Self { underlying_price })
    }

    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }
}
