//! Reproducible sampling primitives
//!
//! Everything that draws randomness goes through [`RandomSource`], so a
//! session is a pure function of its inputs and the seed.

pub mod random;
pub mod shuffle;
pub mod weighted;

pub use random::{RandomSource, SeededRandom};
pub use shuffle::shuffle;
pub use weighted::weighted_pick;
