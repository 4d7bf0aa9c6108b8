//! Random number generation for simulation.

mod prng;

pub use prng::SimRng;
