use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PricingError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    /// Canonical label, `"Call"` or `"Put"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses the exact labels `"Call"` and `"Put"`.
    ///
    /// # Examples
    /// ```rust
    /// use greekbook::core::OptionType;
    ///
    /// assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
    /// assert!("Straddle".parse::<OptionType>().is_err());
    /// ```
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "Call" => Ok(Self::Call),
            "Put" => Ok(Self::Put),
            other => Err(PricingError::InvalidInstrument(format!(
                "option type must be 'Call' or 'Put', got '{other}'"
            ))),
        }
    }
}
