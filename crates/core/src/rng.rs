//! RNG module - seeded randomness for ball spawns
//!
//! The only random decision in the game is the horizontal velocity of a newly
//! spawned ball. A seeded PCG stream keeps sessions reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::{VELOCITY_X_MAX, VELOCITY_X_MIN};

/// Seeded generator for ball velocities.
#[derive(Debug, Clone)]
pub struct BallRng {
    seed: u64,
    rng: Pcg32,
}

impl BallRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a horizontal velocity.
    ///
    /// The magnitude is a whole number in `VELOCITY_X_MIN..=VELOCITY_X_MAX`
    /// and the sign is a fair coin flip.
    pub fn horizontal_velocity(&mut self) -> f32 {
        let magnitude = self
            .rng
            .random_range(VELOCITY_X_MIN as i32..=VELOCITY_X_MAX as i32) as f32;
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}
