//! Aim state and the engine that owns it
//!
//! Phase-scoped data lives inside the phase variant, so a radius direction
//! only exists while aiming the radius and a hold timer only while locked.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::{BoardGeometry, STANDARD_BOARD};
use super::jitter::AimJitter;
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::tuning::DifficultyParams;

/// Current phase of a throw, for presentation branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Cursor sweeps clockwise around the board
    AimingAngle,
    /// Bearing is fixed, cursor bounces in and out
    AimingRadius,
    /// Throw landed, holding before the next one
    Locked,
}

/// Which way the radius oscillation is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadialDirection {
    #[default]
    Outward,
    Inward,
}

impl RadialDirection {
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            RadialDirection::Outward => 1.0,
            RadialDirection::Inward => -1.0,
        }
    }
}

/// Phase plus the data that only exists during it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AimPhase {
    AimingAngle {
        /// Seconds since the angle phase was entered (drives the ramp)
        time_in_phase: f32,
    },
    AimingRadius {
        /// Jittered bearing captured by the first confirm
        locked_theta: f32,
        direction: RadialDirection,
        /// Seconds since the radius phase was entered (drives the ramp)
        time_in_phase: f32,
    },
    Locked {
        locked_theta: f32,
        locked_r: f32,
        /// Seconds left before the aim resets
        hold_remaining: f32,
    },
}

impl AimPhase {
    pub fn phase(&self) -> Phase {
        match self {
            AimPhase::AimingAngle { .. } => Phase::AimingAngle,
            AimPhase::AimingRadius { .. } => Phase::AimingRadius,
            AimPhase::Locked { .. } => Phase::Locked,
        }
    }
}

/// Mutable aim state, advanced every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimState {
    pub phase: AimPhase,
    /// Raw bearing (radians, clockwise-positive motion, wrapped to (-π, π])
    pub theta: f32,
    /// Raw radius (board units)
    pub r: f32,
    /// Total simulated time (seconds); jitter is a function of this
    pub elapsed: f32,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            phase: AimPhase::AimingAngle { time_in_phase: 0.0 },
            theta: INITIAL_THETA,
            r: ANGLE_PHASE_RADIUS,
            elapsed: 0.0,
        }
    }
}

impl AimState {
    /// Back to the start of a throw. Elapsed time keeps running.
    pub fn reset_aim(&mut self) {
        self.phase = AimPhase::AimingAngle { time_in_phase: 0.0 };
        self.theta = INITIAL_THETA;
        self.r = ANGLE_PHASE_RADIUS;
    }
}

/// The aim/scoring engine
///
/// Driven by a host loop through `advance` and `confirm` (see `tick.rs`).
#[derive(Debug, Clone)]
pub struct AimEngine {
    /// Seed the jitter phase offsets were drawn from
    pub seed: u64,
    pub(super) difficulty: DifficultyParams,
    pub(super) board: BoardGeometry,
    pub(super) jitter: AimJitter,
    pub(super) state: AimState,
    /// Set by the first `advance`; confirms before that are ignored
    pub(super) primed: bool,
}

impl AimEngine {
    /// Create an engine on the standard board
    pub fn new(seed: u64, difficulty: DifficultyParams) -> Self {
        debug_assert!(difficulty.validate().is_ok(), "invalid difficulty table");
        Self {
            seed,
            difficulty,
            board: STANDARD_BOARD,
            jitter: AimJitter::from_seed(seed, &difficulty),
            state: AimState::default(),
            primed: false,
        }
    }

    /// Replace the board geometry
    pub fn with_board(mut self, board: BoardGeometry) -> Self {
        self.board = board;
        self
    }

    /// Replace the jitter channels (e.g. `AimJitter::none()` for practice)
    pub fn with_jitter(mut self, jitter: AimJitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn phase(&self) -> Phase {
        self.state.phase.phase()
    }

    pub fn state(&self) -> &AimState {
        &self.state
    }

    pub fn difficulty(&self) -> &DifficultyParams {
        &self.difficulty
    }

    pub fn board(&self) -> &BoardGeometry {
        &self.board
    }

    pub fn jitter(&self) -> &AimJitter {
        &self.jitter
    }

    /// True once the host has advanced the engine at least once
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// Upper bound of the radius oscillation
    #[inline]
    pub fn radius_max(&self) -> f32 {
        self.difficulty.radius_max.max(0.0)
    }

    /// Current aim speed for the active phase (radians/sec or units/sec)
    pub fn current_speed(&self) -> Option<f32> {
        match self.state.phase {
            AimPhase::AimingAngle { time_in_phase } => {
                Some(self.difficulty.angular_speed(time_in_phase))
            }
            AimPhase::AimingRadius { time_in_phase, .. } => {
                Some(self.difficulty.radial_speed(time_in_phase))
            }
            AimPhase::Locked { .. } => None,
        }
    }

    /// Bearing with angular jitter applied (not re-wrapped)
    pub fn jittered_theta(&self) -> f32 {
        self.state.theta + self.jitter.angle.sample(self.state.elapsed)
    }

    /// Radius with radial jitter applied, clamped to [0, radius_max]
    pub fn jittered_r(&self) -> f32 {
        (self.state.r + self.jitter.radius.sample(self.state.elapsed))
            .max(0.0)
            .min(self.radius_max())
    }

    /// Polar (r, theta) of the cursor as shown this frame
    pub fn display_polar(&self) -> (f32, f32) {
        match self.state.phase {
            AimPhase::AimingAngle { .. } => (self.state.r, self.jittered_theta()),
            AimPhase::AimingRadius { locked_theta, .. } => (self.jittered_r(), locked_theta),
            AimPhase::Locked {
                locked_theta,
                locked_r,
                ..
            } => (locked_r, locked_theta),
        }
    }

    /// Board-local cartesian position of the cursor
    pub fn display_position(&self) -> Vec2 {
        let (r, theta) = self.display_polar();
        polar_to_cartesian(r, theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_starts_aiming_angle_at_top() {
        let engine = AimEngine::new(12345, DifficultyParams::default());
        assert_eq!(engine.phase(), Phase::AimingAngle);
        assert!(!engine.is_primed());
        assert_eq!(engine.state().theta, INITIAL_THETA);
        assert_eq!(engine.state().r, ANGLE_PHASE_RADIUS);
        assert_eq!(engine.state().elapsed, 0.0);
    }

    #[test]
    fn test_display_position_without_jitter() {
        let engine = AimEngine::new(1, DifficultyParams::default()).with_jitter(AimJitter::none());
        let pos = engine.display_position();
        assert!(pos.x.abs() < 1e-6);
        assert!((pos.y - ANGLE_PHASE_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn test_display_position_includes_jitter() {
        let engine = AimEngine::new(99, DifficultyParams::default());
        let (r, theta) = engine.display_polar();
        let expected = INITIAL_THETA + engine.jitter().angle.sample(0.0);
        assert_eq!(r, ANGLE_PHASE_RADIUS);
        assert!((theta - expected).abs() < 1e-6);
    }

    #[test]
    fn test_display_polar_aiming_radius_uses_locked_bearing() {
        let mut engine = AimEngine::new(21, DifficultyParams::default());
        engine.state.phase = AimPhase::AimingRadius {
            locked_theta: -0.7,
            direction: RadialDirection::Inward,
            time_in_phase: 0.2,
        };
        engine.state.theta = 2.0;
        engine.state.r = 0.5;
        engine.state.elapsed = 1.3;

        let (r, theta) = engine.display_polar();
        assert_eq!(theta, -0.7);
        assert_eq!(r, engine.jittered_r());
        let expected = 0.5 + engine.jitter().radius.sample(1.3);
        assert!((r - expected).abs() < 1e-6);

        // Jitter past the bound is clamped in the display too
        let loud = DifficultyParams {
            radius_jitter_amplitude: 0.5,
            ..DifficultyParams::default()
        };
        engine.jitter = AimJitter::from_seed(21, &loud);
        engine.state.r = engine.radius_max();
        for i in 0..100 {
            engine.state.elapsed = i as f32 * 0.05;
            let (r, _) = engine.display_polar();
            assert!(r >= 0.0 && r <= engine.radius_max());
        }
    }

    #[test]
    fn test_display_polar_locked_ignores_jitter() {
        let mut engine = AimEngine::new(8, DifficultyParams::default());
        engine.state.phase = AimPhase::Locked {
            locked_theta: 0.3,
            locked_r: 0.4,
            hold_remaining: 0.5,
        };
        engine.state.theta = -2.0;
        engine.state.r = 0.9;
        for i in 0..10 {
            engine.state.elapsed = i as f32 * 0.37;
            assert_eq!(engine.display_polar(), (0.4, 0.3));
            assert_eq!(engine.display_position(), polar_to_cartesian(0.4, 0.3));
        }
    }

    #[test]
    fn test_current_speed_starts_at_base() {
        let params = DifficultyParams::default();
        let engine = AimEngine::new(5, params);
        assert_eq!(engine.current_speed(), Some(params.base_angular_speed));
    }

    #[test]
    fn test_jittered_r_is_clamped() {
        let params = DifficultyParams {
            radius_jitter_amplitude: 0.5,
            ..Default::default()
        };
        let mut engine = AimEngine::new(3, params);
        engine.state.r = engine.radius_max();
        for i in 0..200 {
            engine.state.elapsed = i as f32 * 0.05;
            let r = engine.jittered_r();
            assert!(r >= 0.0 && r <= engine.radius_max());
        }
        engine.state.r = 0.0;
        for i in 0..200 {
            engine.state.elapsed = i as f32 * 0.05;
            assert!(engine.jittered_r() >= 0.0);
        }
    }

    #[test]
    fn test_reset_aim_keeps_elapsed() {
        let mut state = AimState {
            phase: AimPhase::Locked {
                locked_theta: 0.3,
                locked_r: 0.4,
                hold_remaining: 0.0,
            },
            theta: -1.0,
            r: 0.2,
            elapsed: 7.5,
        };
        state.reset_aim();
        assert_eq!(state.phase, AimPhase::AimingAngle { time_in_phase: 0.0 });
        assert_eq!(state.theta, INITIAL_THETA);
        assert_eq!(state.r, ANGLE_PHASE_RADIUS);
        assert_eq!(state.elapsed, 7.5);
    }
}
