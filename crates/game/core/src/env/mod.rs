//! Sources of nondeterminism the engine draws from.
//!
//! The puzzle has exactly one: the random source used for grid generation
//! and target selection. Callers own it and lend it to the constructors.
mod rng;

pub use rng::{PcgRng, RandomSource};
