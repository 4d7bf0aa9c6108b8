//! Crate-level error type.
//!
//! Each module reports its own structured error; [`PricingError`] unifies
//! them into a single surface for callers (e.g. a presentation layer
//! invoking all three engines) via `From` conversions.

use thiserror::Error;

use crate::analytical::DistributionError;
use crate::instruments::InstrumentError;
use crate::lattice::LatticeError;
use crate::mc::ConfigError;

/// Unified pricing error.
///
/// Wraps the per-module error types without losing their structure.
/// All variants are local, synchronous and recoverable: a caller can
/// re-prompt for valid input and retry.
///
/// # Examples
/// ```
/// use pricer_bsm::error::PricingError;
/// use pricer_bsm::instruments::InstrumentError;
///
/// let err: PricingError = InstrumentError::UnresolvedCostOfCarry.into();
/// assert!(err.to_string().contains("cost of carry"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid option kind or parameter record.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Normal distribution kernel domain error.
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// Binomial lattice construction error.
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// Monte Carlo configuration error.
    #[error(transparent)]
    Simulation(#[from] ConfigError),
}
