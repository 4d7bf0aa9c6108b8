//! Lattice engine error types.

use thiserror::Error;

/// Errors from the binomial lattice engine.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatticeError {
    /// Step count must be at least 1.
    #[error("Invalid step count: {0} (must be at least 1)")]
    InvalidStepCount(usize),

    /// Risk-neutral probability fell outside [0, 1].
    ///
    /// Occurs when the time step is too coarse for the drift, so that
    /// `e^(b dt)` escapes the `[d, u]` interval.
    #[error("Unstable risk-neutral probability: {p} lies outside [0, 1]; use more steps")]
    UnstableProbability {
        /// The offending probability.
        p: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_step_count_display() {
        let err = LatticeError::InvalidStepCount(0);
        assert_eq!(format!("{}", err), "Invalid step count: 0 (must be at least 1)");
    }

    #[test]
    fn test_unstable_probability_display() {
        let err = LatticeError::UnstableProbability { p: 1.25 };
        assert!(format!("{}", err).contains("1.25"));
    }
}
