//! Simulation configuration errors.

use std::error::Error;
use std::fmt;

/// Errors raised while building a [`MonteCarloConfig`].
///
/// [`MonteCarloConfig`]: super::MonteCarloConfig
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Trial count was zero or exceeded the hard cap.
    InvalidTrialCount(u64),
    /// Worker count was zero.
    InvalidWorkerCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTrialCount(n) => {
                write!(f, "Invalid trial count: {}", n)
            }
            ConfigError::InvalidWorkerCount(n) => {
                write!(f, "Invalid worker count: {}", n)
            }
        }
    }
}

impl Error for ConfigError {}
