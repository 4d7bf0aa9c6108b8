//! Instrument error types.
//!
//! This module provides structured error handling for option kind parsing
//! and parameter record construction.

use thiserror::Error;

/// Instrument-related errors.
///
/// All variants occur at construction or parsing time, before any pricing
/// engine runs; a record that constructs successfully is safe to price.
///
/// # Variants
/// - `InvalidOptionKind`: kind string not in {call, put}
/// - `DomainViolation`: non-positive spot, strike, expiry or volatility
/// - `UnresolvedCostOfCarry`: neither an explicit carry rate nor a product
///   class supplied
/// - `MissingParameter`: a required builder field was never set
///
/// # Examples
/// ```
/// use pricer_bsm::instruments::InstrumentError;
///
/// let err = InstrumentError::DomainViolation {
///     parameter: "volatility",
///     value: -0.2,
/// };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InstrumentError {
    /// Option kind string not recognised as a call or a put.
    #[error("Invalid option kind: {0:?}")]
    InvalidOptionKind(String),

    /// A parameter violated its strict-positivity precondition.
    #[error("Domain violation: {parameter} = {value} must be strictly positive")]
    DomainViolation {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// Cost of carry could not be resolved at construction.
    #[error("Unresolved cost of carry: supply an explicit rate or a product class")]
    UnresolvedCostOfCarry,

    /// A required builder field was not supplied.
    #[error("Missing parameter: {name} must be specified")]
    MissingParameter {
        /// Name of the missing field.
        name: &'static str,
    },
}
