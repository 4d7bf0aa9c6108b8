//! Cox-Ross-Rubinstein binomial lattice engine.
//!
//! The lattice discretises the terminal distribution into a recombining
//! tree of spot levels and rolls the payoff back through risk-neutral
//! expectation:
//!
//! ```text
//! dt = T / steps
//! u  = e^(sigma sqrt(dt)),  d = 1/u
//! p  = (e^(b dt) - d) / (u - d)
//! ```
//!
//! Growth uses the cost-of-carry rate, discounting the risk-free rate;
//! for a plain stock option the two coincide.

use tracing::debug;

use super::error::LatticeError;
use crate::instruments::{OptionKind, OptionParameters};
use crate::rounding::round_price;

/// European option pricer on a Cox-Ross-Rubinstein lattice.
///
/// The engine is cheap to construct and reusable across parameter
/// records; `price` allocates one spot vector per level and one value
/// vector for the rollback.
///
/// # Examples
/// ```
/// use pricer_bsm::instruments::{OptionKind, OptionParameters, ProductClass};
/// use pricer_bsm::lattice::BinomialTreeEngine;
///
/// let params = OptionParameters::from_product(
///     ProductClass::StockOption,
///     50.0_f64, 52.0, 0.05, 2.0, 0.3,
/// ).unwrap();
///
/// let engine = BinomialTreeEngine::new(100).unwrap();
/// assert_eq!(engine.price(OptionKind::Put, &params).unwrap(), 6.7781);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTreeEngine {
    steps: usize,
}

impl BinomialTreeEngine {
    /// Creates an engine with the given number of time steps.
    ///
    /// # Errors
    /// Returns [`LatticeError::InvalidStepCount`] for zero steps.
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidStepCount(steps));
        }
        Ok(Self { steps })
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices a vanilla European option on the lattice.
    ///
    /// The result is rounded to 4 decimal digits.
    ///
    /// # Errors
    /// Returns [`LatticeError::UnstableProbability`] when the risk-neutral
    /// probability leaves [0, 1], which happens when the time step is too
    /// coarse for the carry rate.
    pub fn price(
        &self,
        kind: OptionKind,
        params: &OptionParameters<f64>,
    ) -> Result<f64, LatticeError> {
        let dt = params.expiry() / self.steps as f64;
        let up = (params.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (params.cost_of_carry() * dt).exp();
        let discount = (params.rate() * dt).exp();
        let p = (growth - down) / (up - down);

        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(LatticeError::UnstableProbability { p });
        }

        debug!(
            steps = self.steps,
            dt, up, p, "rolling back binomial lattice"
        );

        // Terminal spot levels by the recombining recurrence: index 0 is
        // the all-up node, index i carries i down moves.
        let mut spots = vec![params.spot()];
        for _ in 0..self.steps {
            let mut next = Vec::with_capacity(spots.len() + 1);
            next.push(spots[0] * up);
            for &s in &spots {
                next.push(s * down);
            }
            spots = next;
        }

        let mut values: Vec<f64> = spots
            .iter()
            .map(|&s| kind.intrinsic(s, params.strike()))
            .collect();

        // Backward induction; node i rolls up from children i and i + 1.
        for level in (0..self.steps).rev() {
            for i in 0..=level {
                values[i] = (p * values[i] + (1.0 - p) * values[i + 1]) / discount;
            }
            values.truncate(level + 1);
        }

        Ok(round_price(values[0]))
    }
}
