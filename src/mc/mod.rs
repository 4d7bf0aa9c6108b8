//! Monte Carlo simulation layer.
//!
//! This module provides:
//! - [`MonteCarloConfig`]: validated simulation configuration
//! - [`MonteCarloPricer`]: parallel inverse-transform pricing engine
//! - [`ConfigError`]: configuration validation errors

mod config;
mod error;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_TRIALS};
pub use error::ConfigError;
pub use pricer::MonteCarloPricer;
