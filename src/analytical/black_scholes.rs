//! Generalized Black-Scholes closed-form pricing.
//!
//! One formula prices every product class through the cost-of-carry rate
//! `b` carried by the parameter record:
//!
//! ```text
//! d1 = (ln(S/K) + (b + sigma^2/2) T) / (sigma sqrt(T))
//! d2 = d1 - sigma sqrt(T)
//!
//! call = S e^((b-r)T) N(d1) - K e^(-rT) N(d2)
//! put  = K e^(-rT) N(-d2) - S e^((b-r)T) N(-d1)
//! ```

use num_traits::Float;

use super::distributions::norm_cdf;
use crate::instruments::{OptionKind, OptionParameters};
use crate::rounding::round_price;

/// Prices a vanilla European option with the generalized closed form.
///
/// The result is rounded to 4 decimal digits.
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::price;
/// use pricer_bsm::instruments::{OptionKind, OptionParameters, ProductClass};
///
/// let params = OptionParameters::from_product(
///     ProductClass::StockOption,
///     60.0_f64, 65.0, 0.08, 0.25, 0.3,
/// ).unwrap();
///
/// assert_eq!(price(OptionKind::Call, &params), 2.1334);
/// ```
pub fn price<T: Float>(kind: OptionKind, params: &OptionParameters<T>) -> T {
    round_price(generalized_price(
        kind,
        params.spot(),
        params.strike(),
        params.rate(),
        params.expiry(),
        params.volatility(),
        params.cost_of_carry(),
    ))
}

/// The `(d1, d2)` pair of the generalized formula.
#[inline]
pub(crate) fn d1_d2<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    volatility: T,
    cost_of_carry: T,
) -> (T, T) {
    let vol_sqrt_t = volatility * expiry.sqrt();
    let d1 = ((spot / strike).ln()
        + (cost_of_carry + volatility * volatility / T::from(2.0).unwrap()) * expiry)
        / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Raw scalar core, unvalidated and unrounded.
///
/// Exposed at crate level so the property tests can exercise algebraic
/// identities (such as the put/call symmetry under a negated volatility)
/// that the validated record intentionally rules out.
pub(crate) fn generalized_price<T: Float>(
    kind: OptionKind,
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    volatility: T,
    cost_of_carry: T,
) -> T {
    let (d1, d2) = d1_d2(spot, strike, expiry, volatility, cost_of_carry);
    let carry_discount = ((cost_of_carry - rate) * expiry).exp();
    let rate_discount = (-rate * expiry).exp();

    match kind {
        OptionKind::Call => {
            spot * carry_discount * norm_cdf(d1) - strike * rate_discount * norm_cdf(d2)
        }
        OptionKind::Put => {
            strike * rate_discount * norm_cdf(-d2) - spot * carry_discount * norm_cdf(-d1)
        }
    }
}
