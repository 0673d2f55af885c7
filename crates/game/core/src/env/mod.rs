//! Read-only session environment: labels and the randomness source.
mod rng;
mod sentences;

pub use rng::{PcgRng, RngOracle, SeedContext, compute_seed};
pub use sentences::{ActionLabels, Sentences};
