//! Closed-form Black-Scholes-Merton kernels with continuous dividend yield.
//!
//! Every kernel takes a resolved [`PricingContext`], so inputs are already validated
//! (`T > 0`, `σ > 0`, `S > 0`) and no NaN/∞ can come out of the `√T` divisions.
//!
//! Conventions:
//! - `T = days / 365`,
//! - `d1 = (ln(S e^(-qT) / (K e^(-rT))) + σ²T/2) / (σ√T)`, `d2 = d1 - σ√T`,
//! - vega is per +1 vol point (scaled by `0.01`),
//! - theta is per calendar day (annual decay divided by 365).

use crate::core::{Greeks, OptionType};
use crate::math::{normal_cdf, normal_pdf};
use crate::pricing::{DAYS_IN_YEAR, PricingContext};

/// Vega scaling from "per unit of σ" to "per vol point".
const VOL_POINT: f64 = 0.01;

/// Shared intermediate terms for one context.
#[derive(Debug, Clone, Copy)]
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    df_r: f64,
    df_q: f64,
}

#[inline]
fn terms(ctx: &PricingContext) -> Terms {
    let t = ctx.expiry();
    let sqrt_t = t.sqrt();
    let vol = ctx.vol();
    let df_r = (-ctx.rate() * t).exp();
    let df_q = (-ctx.dividend_yield() * t).exp();
    let sig_sqrt_t = vol * sqrt_t;
    let d1 = ((ctx.spot() * df_q / (ctx.strike() * df_r)).ln() + 0.5 * vol * vol * t) / sig_sqrt_t;
    Terms {
        d1,
        d2: d1 - sig_sqrt_t,
        sqrt_t,
        df_r,
        df_q,
    }
}

/// Returns `(d1, d2)` for the context.
#[inline]
pub fn d1_d2(ctx: &PricingContext) -> (f64, f64) {
    let t = terms(ctx);
    (t.d1, t.d2)
}

#[inline]
fn price_from(ctx: &PricingContext, t: &Terms) -> f64 {
    let (s, k) = (ctx.spot(), ctx.strike());
    match ctx.option_type() {
        OptionType::Call => s * t.df_q * normal_cdf(t.d1) - k * t.df_r * normal_cdf(t.d2),
        OptionType::Put => k * t.df_r * normal_cdf(-t.d2) - s * t.df_q * normal_cdf(-t.d1),
    }
}

#[inline]
fn delta_from(ctx: &PricingContext, t: &Terms) -> f64 {
    match ctx.option_type() {
        OptionType::Call => t.df_q * normal_cdf(t.d1),
        OptionType::Put => t.df_q * (normal_cdf(t.d1) - 1.0),
    }
}

#[inline]
fn gamma_from(ctx: &PricingContext, t: &Terms) -> f64 {
    normal_pdf(t.d1) * t.df_q / (ctx.spot() * ctx.vol() * t.sqrt_t)
}

#[inline]
fn vega_from(ctx: &PricingContext, t: &Terms) -> f64 {
    ctx.spot() * t.df_q * normal_pdf(t.d1) * t.sqrt_t * VOL_POINT
}

#[inline]
fn theta_from(ctx: &PricingContext, t: &Terms) -> f64 {
    let (s, k, r, q, vol) = (
        ctx.spot(),
        ctx.strike(),
        ctx.rate(),
        ctx.dividend_yield(),
        ctx.vol(),
    );
    let decay = -s * normal_pdf(t.d1) * vol * t.df_q / (2.0 * t.sqrt_t);
    let annual = match ctx.option_type() {
        OptionType::Call => {
            decay + q * s * normal_cdf(t.d1) * t.df_q - r * k * t.df_r * normal_cdf(t.d2)
        }
        OptionType::Put => {
            decay - q * s * normal_cdf(-t.d1) * t.df_q + r * k * t.df_r * normal_cdf(-t.d2)
        }
    };
    annual / DAYS_IN_YEAR
}

/// Fair value.
#[inline]
pub fn price(ctx: &PricingContext) -> f64 {
    price_from(ctx, &terms(ctx))
}

/// Sensitivity to a 1.0 move in spot.
#[inline]
pub fn delta(ctx: &PricingContext) -> f64 {
    delta_from(ctx, &terms(ctx))
}

/// Sensitivity of delta to a 1.0 move in spot; identical for calls and puts.
#[inline]
pub fn gamma(ctx: &PricingContext) -> f64 {
    gamma_from(ctx, &terms(ctx))
}

/// Price change for a +1 vol point move.
#[inline]
pub fn vega(ctx: &PricingContext) -> f64 {
    vega_from(ctx, &terms(ctx))
}

/// Price change per calendar day.
#[inline]
pub fn theta(ctx: &PricingContext) -> f64 {
    theta_from(ctx, &terms(ctx))
}

/// Price and all Greeks from a single `d1`/`d2` evaluation.
///
/// Each field equals the corresponding standalone kernel bit for bit.
pub fn greeks(ctx: &PricingContext) -> Greeks {
    let t = terms(ctx);
    Greeks {
        price: price_from(ctx, &t),
        delta: delta_from(ctx, &t),
        gamma: gamma_from(ctx, &t),
        vega: vega_from(ctx, &t),
        theta: theta_from(ctx, &t),
    }
}
