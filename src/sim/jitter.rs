//! Simulated hand tremor
//!
//! Jitter is a pure function of elapsed time and a phase offset drawn once at
//! construction, so the cursor moves smoothly and replays identically for the
//! same seed.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::DifficultyParams;

/// One sinusoidal jitter channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    pub amplitude: f32,
    /// Radians per second
    pub frequency: f32,
    /// Phase offset (radians)
    pub seed: f32,
}

impl Jitter {
    pub fn new(amplitude: f32, frequency: f32, seed: f32) -> Self {
        Self {
            amplitude,
            frequency,
            seed,
        }
    }

    /// Offset at elapsed time `t` (seconds)
    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        self.amplitude * (self.frequency * t + self.seed).sin()
    }
}

/// Independent angular and radial jitter channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimJitter {
    pub angle: Jitter,
    pub radius: Jitter,
}

impl AimJitter {
    /// Draw both phase offsets from a PCG stream seeded by `seed`
    pub fn from_seed(seed: u64, params: &DifficultyParams) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let angle_seed = rng.random_range(0.0..TAU);
        let radius_seed = rng.random_range(0.0..TAU);
        Self {
            angle: Jitter::new(
                params.angle_jitter_amplitude,
                params.angle_jitter_frequency,
                angle_seed,
            ),
            radius: Jitter::new(
                params.radius_jitter_amplitude,
                params.radius_jitter_frequency,
                radius_seed,
            ),
        }
    }

    /// No tremor at all
    pub fn none() -> Self {
        Self {
            angle: Jitter::new(0.0, 0.0, 0.0),
            radius: Jitter::new(0.0, 0.0, 0.0),
        }
    }
}
