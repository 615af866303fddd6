//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function, Hart's rational
//!   approximation (as arranged by West), accurate to double precision
//! - `norm_pdf`: Probability density function

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2π)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this |x| the tail underflows to zero.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch from the rational form to the continued fraction.
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

const NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

const DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Lower tail Φ(−|x|).
fn lower_tail(abs_x: f64) -> f64 {
    if abs_x > TAIL_CUTOFF {
        return 0.0;
    }
    let gauss = (-0.5 * abs_x * abs_x).exp();
    if abs_x < RATIONAL_LIMIT {
        gauss * horner(&NUMERATOR, abs_x) / horner(&DENOMINATOR, abs_x)
    } else {
        let fraction = [4.0, 3.0, 2.0, 1.0]
            .iter()
            .fold(abs_x + 0.65, |b, &k| abs_x + k / b);
        gauss / fraction / SQRT_2PI
    }
}

/// Standard normal cumulative distribution function Φ(x).
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-14);
/// assert!((norm_cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
pub fn norm_cdf(x: f64) -> f64 {
    let tail = lower_tail(x.abs());
    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Standard normal density φ(x) = exp(−x²/2) / sqrt(2π).
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.158_655_253_931_457_07, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0), 0.977_249_868_051_820_8, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-3.0), 0.001_349_898_031_630_094_6, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_far_tails() {
        assert_relative_eq!(norm_cdf(-8.0), 6.220_960_574_271_785e-16, max_relative = 1e-6);
        assert_eq!(norm_cdf(-40.0), 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[test]
    fn test_cdf_symmetry() {
        for x in [-5.0, -1.5, -0.3, 0.7, 2.5] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_pdf_is_cdf_slope() {
        let h = 1e-5;
        for x in [-2.5, -0.5, 0.0, 1.0, 3.0] {
            let slope = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(slope, norm_pdf(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pdf_values() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-16);
        assert_relative_eq!(norm_pdf(-2.0), 0.053_990_966_513_188_06, epsilon = 1e-15);
    }
}
