//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Hard cap on the trial count of a single simulation.
pub const MAX_TRIALS: u64 = 100_000_000;

/// Validated Monte Carlo configuration.
///
/// Built through [`MonteCarloConfigBuilder`]; a config that exists holds
/// a trial count in `[1, MAX_TRIALS]` and at least one worker.
///
/// # Examples
/// ```
/// use pricer_bsm::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(500_000)
///     .n_workers(4)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_trials(), 500_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_trials: u64,
    n_workers: usize,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the total trial count.
    #[inline]
    pub fn n_trials(&self) -> u64 {
        self.n_trials
    }

    /// Returns the worker count.
    #[inline]
    pub fn n_workers(&self) -> usize {
        self.n_workers
    }

    /// Returns the explicit seed, if one was set.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Debug, Clone, Default)]
pub struct MonteCarloConfigBuilder {
    n_trials: Option<u64>,
    n_workers: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the total trial count (required).
    #[inline]
    pub fn n_trials(mut self, n_trials: u64) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the worker count (defaults to 1).
    #[inline]
    pub fn n_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = Some(n_workers);
        self
    }

    /// Pins the base seed for reproducible runs.
    ///
    /// Without a seed, each run draws a fresh one from the thread-local
    /// entropy source.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidTrialCount`] for zero trials or more than
    ///   [`MAX_TRIALS`]
    /// - [`ConfigError::InvalidWorkerCount`] for zero workers
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_trials = self.n_trials.unwrap_or(0);
        if n_trials == 0 || n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(n_trials));
        }

        let n_workers = self.n_workers.unwrap_or(1);
        if n_workers == 0 {
            return Err(ConfigError::InvalidWorkerCount(n_workers));
        }

        Ok(MonteCarloConfig {
            n_trials,
            n_workers,
            seed: self.seed,
        })
    }
}
