//! Dart Arcade - A two-phase aim dart minigame
//!
//! Core modules:
//! - `sim`: Deterministic aim engine (state machine, jitter, board scoring)
//! - `tuning`: Data-driven difficulty balance
//! - `settings`: Player-facing configuration loaded from JSON
//! - `run`: Round bookkeeping fed by completed throws

pub mod error;
pub mod run;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use run::{RunPhase, RunTracker};
pub use settings::Settings;
pub use tuning::{DifficultyParams, DifficultyPreset};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the host loop (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the host loop will feed in one frame
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Board units: the double ring's outer edge sits at 1.0
    pub const BOARD_RADIUS: f32 = 1.0;

    /// Radius the cursor is pinned to while aiming the angle
    pub const ANGLE_PHASE_RADIUS: f32 = BOARD_RADIUS * 0.85;
    /// Starting bearing for every throw (12 o'clock)
    pub const INITIAL_THETA: f32 = std::f32::consts::FRAC_PI_2;

    /// How long a locked throw is held before the aim resets (seconds)
    pub const LOCK_HOLD_SECS: f32 = 0.6;
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    // rem_euclid may round up to exactly TAU; that lands on 0 below
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle_positive(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_normalize_angle_boundaries() {
        assert_eq!(normalize_angle(PI), PI);
        assert_eq!(normalize_angle(-PI), PI);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((normalize_angle(-FRAC_PI_2 - TAU) + FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_angle_positive() {
        assert_eq!(normalize_angle_positive(0.0), 0.0);
        assert!((normalize_angle_positive(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert!(normalize_angle_positive(-1e-9) < TAU);
    }

    #[test]
    fn test_polar_roundtrip() {
        let p = polar_to_cartesian(0.5, FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 0.5).abs() < 1e-6);

        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 0.5).abs() < 1e-6);
        assert!((theta - FRAC_PI_2).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn normalize_angle_stays_in_half_open_range(angle in -1.0e4f32..1.0e4f32) {
            let wrapped = normalize_angle(angle);
            prop_assert!(wrapped > -PI && wrapped <= PI);
        }

        #[test]
        fn normalize_angle_positive_stays_in_range(angle in -1.0e4f32..1.0e4f32) {
            let wrapped = normalize_angle_positive(angle);
            prop_assert!((0.0..TAU).contains(&wrapped));
        }
    }
}
