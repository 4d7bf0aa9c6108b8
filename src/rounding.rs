//! Price rounding contract.
//!
//! Every engine reports prices (and Delta) rounded to 4 decimal digits;
//! downstream consumers and the reference scenarios rely on this precision.

use num_traits::Float;

/// Rounds a price to 4 decimal digits.
///
/// # Examples
/// ```
/// use pricer_bsm::rounding::round_price;
///
/// assert_eq!(round_price(2.13337_f64), 2.1334);
/// assert_eq!(round_price(-0.35664_f64), -0.3566);
/// ```
#[inline]
pub fn round_price<T: Float>(value: T) -> T {
    let scale = T::from(10_000.0).unwrap();
    (value * scale).round() / scale
}
