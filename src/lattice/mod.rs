//! Binomial lattice layer.
//!
//! This module provides:
//! - [`BinomialTreeEngine`]: European pricing on a Cox-Ross-Rubinstein
//!   recombining tree
//! - [`LatticeError`]: configuration and stability errors

mod binomial;
mod error;

pub use binomial::BinomialTreeEngine;
pub use error::LatticeError;
