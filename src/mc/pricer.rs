//! Monte Carlo pricing engine.
//!
//! Each trial draws a standard normal through inverse-transform sampling,
//! evolves the spot under the risk-neutral terminal distribution
//!
//! ```text
//! S_T = S e^((b - sigma^2/2) T + sigma z sqrt(T))
//! ```
//!
//! and averages the discounted payoff. Trials are fanned out across a
//! rayon pool; each worker owns an independently seeded generator, and
//! partial sums are merged in worker order so a pinned seed reproduces
//! the price bit for bit.

use rayon::prelude::*;
use tracing::debug;

use super::config::MonteCarloConfig;
use crate::analytical::inv_cdf_unchecked;
use crate::instruments::{OptionKind, OptionParameters};
use crate::rng::SimRng;
use crate::rounding::round_price;

/// Golden-ratio stride decorrelating per-worker seeds.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Partial accumulation from one worker.
#[derive(Debug, Clone, Copy, Default)]
struct TrialSum {
    payoff_sum: f64,
    trials: u64,
}

impl TrialSum {
    fn merge(self, other: TrialSum) -> TrialSum {
        TrialSum {
            payoff_sum: self.payoff_sum + other.payoff_sum,
            trials: self.trials + other.trials,
        }
    }
}

/// Monte Carlo pricer for vanilla European options.
///
/// # Examples
/// ```
/// use pricer_bsm::instruments::{OptionKind, OptionParameters, ProductClass};
/// use pricer_bsm::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let params = OptionParameters::from_product(
///     ProductClass::StockOption,
///     60.0_f64, 65.0, 0.08, 0.25, 0.3,
/// ).unwrap();
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(200_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let price = MonteCarloPricer::new(config).price(OptionKind::Call, &params);
/// assert!((price - 2.1334).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a vanilla European option by simulation.
    ///
    /// The result is rounded to 4 decimal digits. With a pinned seed the
    /// price is deterministic for a given worker count; without one, a
    /// fresh base seed is drawn per run.
    pub fn price(&self, kind: OptionKind, params: &OptionParameters<f64>) -> f64 {
        let n_trials = self.config.n_trials();
        let n_workers = self.config.n_workers();
        let base_seed = self.config.seed().unwrap_or_else(rand::random);

        let base = n_trials / n_workers as u64;
        let remainder = n_trials % n_workers as u64;

        debug!(
            n_trials,
            n_workers, base_seed, "dispatching simulation partitions"
        );

        let partials: Vec<TrialSum> = (0..n_workers)
            .into_par_iter()
            .map(|worker| {
                let trials = base + u64::from((worker as u64) < remainder);
                let seed = base_seed ^ (worker as u64).wrapping_mul(SEED_STRIDE);
                simulate_partition(kind, params, trials, seed)
            })
            .collect();

        // Sequential merge in worker order keeps the floating-point sum
        // independent of rayon's scheduling.
        let total = partials
            .into_iter()
            .fold(TrialSum::default(), TrialSum::merge);
        debug_assert_eq!(total.trials, n_trials);

        let discount = (-params.rate() * params.expiry()).exp();
        round_price(discount * total.payoff_sum / n_trials as f64)
    }
}

fn simulate_partition(
    kind: OptionKind,
    params: &OptionParameters<f64>,
    trials: u64,
    seed: u64,
) -> TrialSum {
    let mut rng = SimRng::from_seed(seed);

    let drift = (params.cost_of_carry() - params.volatility() * params.volatility() / 2.0)
        * params.expiry();
    let diffusion = params.volatility() * params.expiry().sqrt();

    let mut payoff_sum = 0.0;
    for _ in 0..trials {
        // gen_open_uniform keeps the draw strictly inside (0, 1).
        let z = inv_cdf_unchecked(rng.gen_open_uniform());
        let terminal = params.spot() * (drift + diffusion * z).exp();
        payoff_sum += kind.intrinsic(terminal, params.strike());
    }

    TrialSum { payoff_sum, trials }
}
