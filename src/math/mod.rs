//! Randomness and neighbourhood helpers for the brush algorithms

pub mod rng;
pub mod neighbors;

pub use rng::SimpleRng;
pub use neighbors::{FACE_NEIGHBORS, Tally, moore_neighbors};
