//! Numerical building blocks shared by the pricer and the volatility estimator.

use statrs::function::erf::erfc;

pub mod timeseries;

/// Standard normal density `n(x) = e^(-x²/2) / √(2π)`.
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal CDF via the complementary error function.
///
/// `N(x) = erfc(-x / √2) / 2`, accurate to near machine precision in both tails,
/// so `N(x) + N(-x)` stays at 1 to within rounding.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// NIST reference values for the standard normal CDF.
    const CDF_REFERENCE: &[(f64, f64)] = &[
        (-3.0, 0.001_349_898_031_630_094_6),
        (-2.0, 0.022_750_131_948_179_21),
        (-1.0, 0.158_655_253_931_457_02),
        (-0.5, 0.308_537_538_725_986_9),
        (0.0, 0.5),
        (0.5, 0.691_462_461_274_013_1),
        (1.0, 0.841_344_746_068_542_9),
        (2.0, 0.977_249_868_051_820_8),
        (3.0, 0.998_650_101_968_37),
    ];

    #[test]
    fn normal_cdf_matches_reference_values() {
        for &(x, expected) in CDF_REFERENCE {
            assert_relative_eq!(normal_cdf(x), expected, epsilon = 1e-14);
        }
    }

    #[test]
    fn normal_cdf_is_symmetric() {
        for x in [0.1, 0.7, 1.59, 2.5, 5.0] {
            assert_relative_eq!(normal_cdf(x) + normal_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn normal_pdf_peak() {
        assert_relative_eq!(normal_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_relative_eq!(normal_pdf(1.3), normal_pdf(-1.3), epsilon = 1e-15);
    }
}
