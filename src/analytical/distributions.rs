//! Standard normal distribution kernel.
//!
//! This module provides the cumulative distribution function and its
//! inverse for the standard normal distribution, shared by the closed-form
//! engine (CDF), the Delta computation (CDF) and the Monte Carlo sampler
//! (inverse CDF via inverse-transform sampling).
//!
//! The CDF uses a Hart-type rational approximation with a continued
//! fraction in the far tail; it is accurate to double precision over the
//! working range and exactly symmetric by construction. The inverse CDF
//! uses Acklam's three-region rational approximation, accurate to roughly
//! 1.15e-9 over the open interval (0, 1).

use num_traits::Float;

use super::error::DistributionError;

/// sqrt(2 * pi)
const SQRT_TWO_PI: f64 = 2.506_628_274_631_000_5;

// Hart rational approximation coefficients for the central region,
// numerator then denominator, highest degree first.
const CDF_NUM: [f64; 7] = [
    0.035_262_496_599_891_1,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

const CDF_DEN: [f64; 8] = [
    0.088_388_347_648_318_4,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

// Acklam inverse CDF coefficients, highest degree first. The trailing 1.0
// in the denominator arrays is the constant term of the monic polynomial.
const INV_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

const INV_B: [f64; 6] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
    1.0,
];

const INV_C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

const INV_D: [f64; 5] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
    1.0,
];

/// Region boundaries for the Acklam approximation.
const INV_LOW: f64 = 0.02425;
const INV_HIGH: f64 = 0.97575;

/// Evaluates a polynomial with `f64` coefficients (highest degree first)
/// by Horner's method.
#[inline]
fn polynomial<T: Float>(coeffs: &[f64], x: T) -> T {
    coeffs
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + T::from(c).unwrap())
}

/// Standard normal cumulative distribution function N(x).
///
/// Exactly 0.5 at zero. Both signs evaluate the same tail expression, so
/// `norm_cdf(-x)` and `1 - norm_cdf(x)` agree to within one ulp.
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
/// assert!((norm_cdf(1.96_f64) - 0.975).abs() < 1e-3);
/// ```
pub fn norm_cdf<T: Float>(x: T) -> T {
    let y = x.abs();

    // Beyond 37 standard deviations the tail mass underflows f64.
    let tail = if y > T::from(37.0).unwrap() {
        T::zero()
    } else {
        let exponential = (-y * y / T::from(2.0).unwrap()).exp();
        if y < T::from(7.071_067_811_865_47).unwrap() {
            exponential * polynomial(&CDF_NUM, y) / polynomial(&CDF_DEN, y)
        } else {
            // Continued fraction for the far tail.
            let c65 = T::from(0.65).unwrap();
            let b = y + T::one()
                / (y + T::from(2.0).unwrap()
                    / (y + T::from(3.0).unwrap() / (y + T::from(4.0).unwrap() / (y + c65))));
            exponential / (T::from(SQRT_TWO_PI).unwrap() * b)
        }
    };

    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// phi(x) = exp(-x^2 / 2) / sqrt(2 pi)
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    (-x * x / T::from(2.0).unwrap()).exp() / T::from(SQRT_TWO_PI).unwrap()
}

/// Inverse of the standard normal CDF (the quantile function).
///
/// Defined on the open interval (0, 1); the endpoints map to infinities
/// and are rejected.
///
/// # Errors
/// Returns [`DistributionError::OutOfDomain`] for `p <= 0` or `p >= 1`.
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::norm_inv_cdf;
///
/// let z: f64 = norm_inv_cdf(0.975).unwrap();
/// assert!((z - 1.959964).abs() < 1e-4);
///
/// assert!(norm_inv_cdf::<f64>(0.0).is_err());
/// assert!(norm_inv_cdf::<f64>(1.0).is_err());
/// ```
pub fn norm_inv_cdf<T: Float>(p: T) -> Result<T, DistributionError> {
    if p <= T::zero() || p >= T::one() {
        return Err(DistributionError::OutOfDomain {
            p: p.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(inv_cdf_unchecked(p))
}

/// Acklam quantile evaluation for `p` already known to lie in (0, 1).
///
/// Callers must hold the domain invariant; the Monte Carlo sampler uses
/// this path after drawing a strictly positive uniform.
pub(crate) fn inv_cdf_unchecked<T: Float>(p: T) -> T {
    let low = T::from(INV_LOW).unwrap();
    let high = T::from(INV_HIGH).unwrap();
    let two = T::from(2.0).unwrap();

    if p < low {
        // Lower tail.
        let q = (-two * p.ln()).sqrt();
        polynomial(&INV_C, q) / polynomial(&INV_D, q)
    } else if p > high {
        // Upper tail, by symmetry with the lower one.
        let q = (-two * (T::one() - p).ln()).sqrt();
        -polynomial(&INV_C, q) / polynomial(&INV_D, q)
    } else {
        // Central region.
        let q = p - T::from(0.5).unwrap();
        let r = q * q;
        polynomial(&INV_A, r) * q / polynomial(&INV_B, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // CDF tests
    // ==========================================================

    #[test]
    fn test_cdf_at_zero_is_exactly_half() {
        assert_eq!(norm_cdf(0.0_f64), 0.5);
    }

    #[test]
    fn test_cdf_known_values() {
        // Reference values from standard normal tables.
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841_344_746_068_543, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.158_655_253_931_457, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(1.96_f64), 0.975_002_104_851_780, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.977_249_868_051_821, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.998_650_101_968_370, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_symmetry() {
        for &x in &[0.1_f64, 0.5, 1.0, 1.96, 3.3, 7.5, 12.0] {
            assert!((norm_cdf(-x) - (1.0 - norm_cdf(x))).abs() < 1e-15);
        }
    }

    #[test]
    fn test_cdf_far_tail_region() {
        // Crosses into the continued-fraction branch above 5sqrt(2).
        let p = norm_cdf(8.0_f64);
        assert!(p < 1.0);
        assert!(1.0 - p < 1e-14);
        assert!(norm_cdf(-8.0_f64) > 0.0);
    }

    #[test]
    fn test_cdf_underflow_cutoff() {
        assert_eq!(norm_cdf(-38.0_f64), 0.0);
        assert_eq!(norm_cdf(38.0_f64), 1.0);
    }

    #[test]
    fn test_cdf_monotonic() {
        let mut prev = norm_cdf(-6.0_f64);
        let mut x = -6.0_f64;
        while x < 6.0 {
            x += 0.25;
            let next = norm_cdf(x);
            assert!(next > prev, "CDF not increasing at x = {}", x);
            prev = next;
        }
    }

    // ==========================================================
    // PDF tests
    // ==========================================================

    #[test]
    fn test_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), 0.398_942_280_401_433, epsilon = 1e-12);
    }

    #[test]
    fn test_pdf_symmetry() {
        assert_eq!(norm_pdf(1.3_f64), norm_pdf(-1.3_f64));
    }

    // ==========================================================
    // Inverse CDF tests
    // ==========================================================

    #[test]
    fn test_inv_cdf_median() {
        let z: f64 = norm_inv_cdf(0.5).unwrap();
        assert_relative_eq!(z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inv_cdf_known_quantiles() {
        let z: f64 = norm_inv_cdf(0.975).unwrap();
        assert_relative_eq!(z, 1.959_963_984_540_054, epsilon = 1e-8);
        let z: f64 = norm_inv_cdf(0.01).unwrap();
        assert_relative_eq!(z, -2.326_347_874_040_841, epsilon = 1e-8);
    }

    #[test]
    fn test_inv_cdf_covers_all_three_regions() {
        // Lower tail, centre and upper tail each round-trip through the CDF.
        for &p in &[0.001_f64, 0.02, 0.3, 0.5, 0.7, 0.98, 0.999] {
            let z = norm_inv_cdf(p).unwrap();
            assert_relative_eq!(norm_cdf(z), p, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_inv_cdf_rejects_endpoints() {
        assert_eq!(
            norm_inv_cdf::<f64>(0.0).unwrap_err(),
            DistributionError::OutOfDomain { p: 0.0 }
        );
        assert_eq!(
            norm_inv_cdf::<f64>(1.0).unwrap_err(),
            DistributionError::OutOfDomain { p: 1.0 }
        );
        assert!(norm_inv_cdf::<f64>(-0.1).is_err());
        assert!(norm_inv_cdf::<f64>(1.1).is_err());
    }

    #[test]
    fn test_inv_cdf_antisymmetry() {
        for &p in &[0.01_f64, 0.1, 0.25, 0.4] {
            let lower: f64 = norm_inv_cdf(p).unwrap();
            let upper: f64 = norm_inv_cdf(1.0 - p).unwrap();
            assert_relative_eq!(lower, -upper, epsilon = 1e-8);
        }
    }
}
