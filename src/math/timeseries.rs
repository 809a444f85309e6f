//! Return transforms and rolling moments over plain `f64` series.
//!
//! Positions without enough history are reported as `None` rather than a
//! placeholder number, so callers can tell "no estimate" from "zero volatility".

/// Computes simple returns from a price series.
///
/// `r_t = P_t / P_{t-1} - 1`
///
/// The output has one element fewer than `prices`; an empty or single-price series
/// yields no returns.
///
/// # Panics
/// Panics if any price is non-finite or <= 0.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    validate_prices(prices);
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Rolling sample standard deviation over the trailing `window` values.
///
/// The output is aligned with `series`: position `i` holds the standard deviation of
/// `series[i + 1 - window..=i]`, or `None` for the first `window - 1` positions.
/// Uses denominator `window - 1` (unbiased sample variance).
///
/// # Panics
/// Panics if `window < 2` or non-finite inputs are present.
pub fn rolling_std_dev(series: &[f64], window: usize) -> Vec<Option<f64>> {
    assert!(window >= 2, "window must be >= 2 for standard deviation");
    assert!(
        series.iter().all(|x| x.is_finite()),
        "series must contain only finite values"
    );

    let mut out = vec![None; window.saturating_sub(1).min(series.len())];
    out.extend(series.windows(window).map(|w| Some(sample_std_dev(w))));
    out
}

fn validate_prices(prices: &[f64]) {
    assert!(
        prices.iter().all(|x| x.is_finite() && *x > 0.0),
        "prices must be finite and strictly positive"
    );
}

fn sample_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_variance(values: &[f64]) -> f64 {
    let mean = sample_mean(values);
    let mut sum = 0.0;
    for &x in values {
        let d = x - mean;
        sum += d * d;
    }
    sum / (values.len() as f64 - 1.0)
}

fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn simple_returns_known_values() {
        let r = simple_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], 0.1, epsilon = 1e-15);
        assert_relative_eq!(r[1], -0.1, epsilon = 1e-15);
        assert!(simple_returns(&[100.0]).is_empty());
    }

    #[test]
    fn rolling_std_dev_is_aligned_and_padded() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = rolling_std_dev(&series, 3);
        assert_eq!(out.len(), series.len());
        assert_eq!(&out[..2], &[None, None]);
        for v in &out[2..] {
            assert_relative_eq!(v.unwrap(), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn rolling_std_dev_on_short_series_is_all_none() {
        let out = rolling_std_dev(&[0.01, -0.02], 5);
        assert_eq!(out, vec![None, None]);
        assert!(rolling_std_dev(&[], 5).is_empty());
    }

    #[test]
    fn rolling_std_dev_of_constant_series_is_zero() {
        let out = rolling_std_dev(&[0.0; 10], 4);
        assert!(out[3..].iter().all(|v| *v == Some(0.0)));
    }

    #[test]
    #[should_panic(expected = "window must be >= 2")]
    fn rolling_std_dev_rejects_degenerate_window() {
        let _ = rolling_std_dev(&[1.0, 2.0], 1);
    }
}
