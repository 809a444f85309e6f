//! Rolling realized volatility from a dated close series, sampled once per month.
//!
//! Pipeline: simple close-to-close returns, trailing sample standard deviation over
//! `window` returns, annualization by a constant factor, then the last defined value
//! inside each calendar month. Positions without a full window stay `None` all the way
//! through instead of turning into a number.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PricingError, PricingResult};
use crate::math::timeseries::{rolling_std_dev, simple_returns};

/// Trading days per year used by the default annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Window length and annualization for [`RealizedVolEstimator`].
///
/// Missing fields in a serialized config fall back to the defaults
/// (30 returns, `√252`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingVolConfig {
    /// Number of trailing returns per estimate; must be at least 2.
    pub window: usize,
    /// Multiplier applied to the per-period standard deviation.
    pub annualization_factor: f64,
}

impl Default for RollingVolConfig {
    fn default() -> Self {
        Self {
            window: 30,
            annualization_factor: TRADING_DAYS_PER_YEAR.sqrt(),
        }
    }
}

impl RollingVolConfig {
    /// # Errors
    /// Returns [`PricingError::InvalidSeries`] if `window < 2` or the factor is not
    /// finite and `> 0`.
    pub fn new(window: usize, annualization_factor: f64) -> PricingResult<Self> {
        let config = Self {
            window,
            annualization_factor,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PricingResult<()> {
        if self.window < 2 {
            return Err(PricingError::InvalidSeries(format!(
                "rolling window must be >= 2 returns, got {}",
                self.window
            )));
        }
        if !(self.annualization_factor.is_finite() && self.annualization_factor > 0.0) {
            return Err(PricingError::InvalidSeries(format!(
                "annualization factor must be finite and > 0, got {}",
                self.annualization_factor
            )));
        }
        Ok(())
    }
}

/// Annualized rolling volatility dated at the later close of its last return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingVolPoint {
    pub date: NaiveDate,
    /// `None` until a full window of returns is available.
    pub value: Option<f64>,
}

/// Historical close series, sorted by date on construction.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use greekbook::vol::{RealizedVolEstimator, RollingVolConfig};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let closes = (0..90u64).map(|i| {
///     let price = if i % 2 == 0 { 100.0 } else { 101.0 };
///     (start + chrono::Days::new(i), price)
/// });
///
/// let estimator = RealizedVolEstimator::new(closes).unwrap();
/// let monthly: Vec<_> = estimator
///     .monthly_rolling_volatility(&RollingVolConfig::default())
///     .unwrap()
///     .collect();
///
/// // First full window closes on Jan 31; the series ends on Mar 30.
/// assert_eq!(monthly.len(), 3);
/// assert_eq!(monthly[1].0, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(monthly.iter().all(|(_, vol)| *vol > 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RealizedVolEstimator {
    samples: Vec<(NaiveDate, f64)>,
}

impl RealizedVolEstimator {
    /// Takes ownership of `(date, close)` samples and sorts them by date.
    ///
    /// The sort is stable: samples sharing a date keep their input order and are
    /// not deduplicated.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidSeries`] if any close is not finite and `> 0`.
    pub fn new<I>(samples: I) -> PricingResult<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let mut samples: Vec<(NaiveDate, f64)> = samples.into_iter().collect();
        if let Some((date, price)) = samples
            .iter()
            .find(|(_, price)| !(price.is_finite() && *price > 0.0))
        {
            return Err(PricingError::InvalidSeries(format!(
                "close on {date} must be finite and > 0, got {price}"
            )));
        }
        samples.sort_by_key(|(date, _)| *date);
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[(NaiveDate, f64)] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// One point per return (every sample but the first), in date order.
    ///
    /// The first `window - 1` points are `None`; a series with fewer than
    /// `window + 1` closes has no defined value at all.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidSeries`] if the config is invalid, or if consecutive
    /// closes are so far apart that a return or its window statistics overflow.
    pub fn rolling_volatility(
        &self,
        config: &RollingVolConfig,
    ) -> PricingResult<Vec<RollingVolPoint>> {
        config.validate()?;

        let prices: Vec<f64> = self.samples.iter().map(|(_, p)| *p).collect();
        let returns = simple_returns(&prices);
        if let Some((i, r)) = returns.iter().enumerate().find(|(_, r)| !r.is_finite()) {
            return Err(PricingError::InvalidSeries(format!(
                "return into {} overflows: {r}",
                self.samples[i + 1].0
            )));
        }
        let rolling = rolling_std_dev(&returns, config.window);

        let points: Vec<RollingVolPoint> = self
            .samples
            .iter()
            .skip(1)
            .zip(rolling)
            .map(|((date, _), std_dev)| RollingVolPoint {
                date: *date,
                value: std_dev.map(|s| s * config.annualization_factor),
            })
            .collect();
        if let Some(point) = points
            .iter()
            .find(|p| p.value.is_some_and(|v| !v.is_finite()))
        {
            return Err(PricingError::InvalidSeries(format!(
                "rolling volatility on {} overflows",
                point.date
            )));
        }

        debug!(
            samples = self.samples.len(),
            window = config.window,
            defined = points.iter().filter(|p| p.value.is_some()).count(),
            "computed rolling realized volatility"
        );
        Ok(points)
    }

    /// Month-end sampled rolling volatility.
    ///
    /// Each item is `(last calendar day of the month, last defined value in that month)`;
    /// months without a defined value are skipped. The returned iterator is lazy and
    /// can be cloned or [`restart`](MonthlyVolatility::restart)ed.
    pub fn monthly_rolling_volatility(
        &self,
        config: &RollingVolConfig,
    ) -> PricingResult<MonthlyVolatility> {
        Ok(MonthlyVolatility {
            points: self.rolling_volatility(config)?,
            cursor: 0,
        })
    }
}

/// Lazy month-by-month reduction of a rolling volatility series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyVolatility {
    points: Vec<RollingVolPoint>,
    cursor: usize,
}

impl MonthlyVolatility {
    /// Rewinds to the first month.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// The underlying daily series.
    pub fn points(&self) -> &[RollingVolPoint] {
        &self.points
    }
}

impl Iterator for MonthlyVolatility {
    type Item = (NaiveDate, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&first) = self.points.get(self.cursor) {
            let (year, month) = (first.date.year(), first.date.month());
            let mut last = None;
            while let Some(point) = self.points.get(self.cursor) {
                if point.date.year() != year || point.date.month() != month {
                    break;
                }
                if point.value.is_some() {
                    last = point.value;
                }
                self.cursor += 1;
            }
            if let Some(vol) = last {
                return Some((month_end(first.date)?, vol));
            }
        }
        None
    }
}

fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}
