//! Analytical layer error types.

use thiserror::Error;

/// Errors from the normal distribution kernel.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// Inverse CDF probability outside the open interval (0, 1).
    #[error("Probability out of domain: {p} must lie strictly inside (0, 1)")]
    OutOfDomain {
        /// The offending probability.
        p: f64,
    },
}
