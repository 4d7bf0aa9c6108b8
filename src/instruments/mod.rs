//! Option contract definitions.
//!
//! This module provides:
//! - [`OptionKind`]: call/put indicator with payoff helpers
//! - [`ProductClass`]: named product variants resolving the cost-of-carry
//! - [`OptionParameters`]: the validated, immutable input record shared by
//!   every pricing engine
//! - [`InstrumentError`]: structured construction/validation errors

mod error;
mod kind;
mod params;

pub use error::InstrumentError;
pub use kind::OptionKind;
pub use params::{OptionParameters, OptionParametersBuilder, ProductClass};
