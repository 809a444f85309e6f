//! Historical volatility estimation.
//!
//! Independent of the pricer: consumes a dated close series and produces realized
//! volatility, as opposed to the implied volatility carried by each option.

pub mod realized;

pub use realized::{
    MonthlyVolatility, RealizedVolEstimator, RollingVolConfig, RollingVolPoint,
    TRADING_DAYS_PER_YEAR,
};
