//! Small PCG-style random number generator for stochastic brushes.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Simple deterministic RNG using hash function
#[derive(Clone, Debug)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator with a fixed seed (reproducible draws).
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Create a generator with a fresh seed for every call.
    pub fn from_entropy() -> Self {
        let mut hasher = RandomState::new().build_hasher();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        hasher.write_u64(nanos);
        Self::new(hasher.finish())
    }

    /// Advance state and return next u32
    pub fn next_u32(&mut self) -> u32 {
        // PCG-like state update
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        // Output function
        let mut h = (self.state >> 32) as u32;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h
    }

    /// Generate f64 in range [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
    }

    /// One independent Bernoulli draw: true with probability `p`.
    ///
    /// `p >= 1.0` is always true and `p <= 0.0` is always false.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
