//! Closed-form analytical layer.
//!
//! This module provides:
//! - [`norm_cdf`], [`norm_pdf`], [`norm_inv_cdf`]: the standard normal
//!   distribution kernel shared by every engine
//! - [`price`]: the generalized Black-Scholes closed form
//! - [`delta`]: the analytic first-order spot sensitivity
//! - [`DistributionError`]: domain errors from the distribution kernel
//!
//! All functions are generic over `num_traits::Float` and pure; pricing a
//! record never mutates shared state.

mod black_scholes;
mod distributions;
mod error;
mod greeks;

pub use black_scholes::price;
pub use distributions::{norm_cdf, norm_inv_cdf, norm_pdf};
pub use error::DistributionError;
pub use greeks::delta;

pub(crate) use distributions::inv_cdf_unchecked;
