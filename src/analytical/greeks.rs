//! Analytic sensitivities.
//!
//! Only Delta is closed over the parameter record for now; the remaining
//! first-order Greeks follow the same pattern when needed.

use num_traits::Float;

use super::black_scholes::d1_d2;
use super::distributions::norm_cdf;
use crate::instruments::{OptionKind, OptionParameters};
use crate::rounding::round_price;

/// Analytic Delta of a vanilla European option.
///
/// ```text
/// call: e^((b-r)T) N(d1)
/// put:  e^((b-r)T) (N(d1) - 1)
/// ```
///
/// The result is rounded to 4 decimal digits. With `b = r` the call Delta
/// lies in [0, 1] and the put Delta in [-1, 0]; a carry rate above the
/// risk-free rate scales both outside the unit interval.
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::delta;
/// use pricer_bsm::instruments::{OptionKind, OptionParameters, ProductClass};
///
/// let params = OptionParameters::from_product(
///     ProductClass::FuturesOption,
///     105.0_f64, 100.0, 0.10, 0.5, 0.36,
/// ).unwrap();
///
/// assert_eq!(delta(OptionKind::Call, &params), 0.5946);
/// assert_eq!(delta(OptionKind::Put, &params), -0.3566);
/// ```
pub fn delta<T: Float>(kind: OptionKind, params: &OptionParameters<T>) -> T {
    let (d1, _) = d1_d2(
        params.spot(),
        params.strike(),
        params.expiry(),
        params.volatility(),
        params.cost_of_carry(),
    );
    let carry_discount = ((params.cost_of_carry() - params.rate()) * params.expiry()).exp();

    let raw = match kind {
        OptionKind::Call => carry_discount * norm_cdf(d1),
        OptionKind::Put => carry_discount * (norm_cdf(d1) - T::one()),
    };
    round_price(raw)
}
