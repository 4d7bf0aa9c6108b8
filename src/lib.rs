//! # pricer_bsm
//!
//! Pricing core for vanilla European options under the
//! Black-Scholes-Merton framework.
//!
//! Three independent, interchangeable pricing engines are provided, all
//! consuming the same immutable [`instruments::OptionParameters`] record:
//!
//! - [`analytical`]: the generalized closed-form Black-Scholes formula
//!   (plus analytic Delta), built on a Hart-type normal CDF approximation.
//! - [`lattice`]: a Cox-Ross-Rubinstein recombining binomial tree with
//!   flat per-level storage and backward induction.
//! - [`mc`]: a Monte Carlo simulator using inverse-transform sampling,
//!   with trial counts partitioned across independently seeded workers.
//!
//! The engines agree with each other to within algorithmic error; the
//! integration tests under `tests/` assert this. All reported prices are
//! rounded to 4 decimal digits as the public contract.
//!
//! ## Example
//!
//! ```
//! use pricer_bsm::analytical;
//! use pricer_bsm::instruments::{OptionKind, OptionParameters};
//!
//! // 3-month call: spot 60, strike 65, rate 8%, vol 30%, carry = rate.
//! let params = OptionParameters::builder()
//!     .spot(60.0)
//!     .strike(65.0)
//!     .rate(0.08)
//!     .expiry(0.25)
//!     .volatility(0.3)
//!     .cost_of_carry(0.08)
//!     .build()?;
//!
//! assert_eq!(analytical::price(OptionKind::Call, &params), 2.1334);
//! # Ok::<(), pricer_bsm::instruments::InstrumentError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod error;
pub mod instruments;
pub mod lattice;
pub mod mc;
pub mod rng;
pub mod rounding;
