//! Frame-driven aim simulation
//!
//! The host calls `advance(dt)` every frame and `confirm()` on a discrete
//! input. Completed throws leave the engine as owned `HitResult`s.

use super::board::HitResult;
use super::state::{AimEngine, AimPhase, RadialDirection};
use crate::consts::*;
use crate::normalize_angle;

/// Receives completed throws (the run bookkeeping side)
pub trait ThrowSink {
    fn submit_throw(&mut self, hit: HitResult);
}

impl ThrowSink for Vec<HitResult> {
    fn submit_throw(&mut self, hit: HitResult) {
        self.push(hit);
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Lock the current phase (click/tap/space)
    pub confirm: bool,
}

impl AimEngine {
    /// Advance the aim simulation by `dt` seconds
    ///
    /// Negative or non-finite deltas count as zero. Large deltas are safe:
    /// position change per call is bounded by `max_speed * dt` and the
    /// radius is clamped at both ends.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.primed = true;

        let radius_max = self.radius_max();
        let state = &mut self.state;
        state.elapsed += dt;

        let mut hold_expired = false;
        match &mut state.phase {
            AimPhase::AimingAngle { time_in_phase } => {
                let speed = self.difficulty.angular_speed(*time_in_phase);
                *time_in_phase += dt;
                // Clockwise rotation: subtract theta
                state.theta = normalize_angle(state.theta - speed * dt);
                state.r = ANGLE_PHASE_RADIUS;
            }
            AimPhase::AimingRadius {
                direction,
                time_in_phase,
                ..
            } => {
                let speed = self.difficulty.radial_speed(*time_in_phase);
                *time_in_phase += dt;
                state.r += direction.sign() * speed * dt;

                if state.r >= radius_max {
                    state.r = radius_max;
                    *direction = RadialDirection::Inward;
                } else if state.r <= 0.0 {
                    state.r = 0.0;
                    *direction = RadialDirection::Outward;
                }
            }
            AimPhase::Locked { hold_remaining, .. } => {
                *hold_remaining -= dt;
                hold_expired = *hold_remaining <= 0.0;
            }
        }

        if hold_expired {
            state.reset_aim();
            log::debug!("Hold expired at t={:.3}, aiming next throw", state.elapsed);
        }
    }

    /// Lock the current phase
    ///
    /// Returns the throw's result when this confirm completes it. Ignored
    /// before the first `advance` and while a throw is held.
    pub fn confirm(&mut self) -> Option<HitResult> {
        if !self.primed {
            log::debug!("Confirm ignored: engine not primed yet");
            return None;
        }

        match self.state.phase {
            AimPhase::AimingAngle { .. } => {
                let locked_theta = self.jittered_theta();
                self.state.phase = AimPhase::AimingRadius {
                    locked_theta,
                    direction: RadialDirection::Outward,
                    time_in_phase: 0.0,
                };
                log::debug!("Angle locked at {:.3} rad", locked_theta);
                None
            }
            AimPhase::AimingRadius { locked_theta, .. } => {
                let locked_r = self.jittered_r();
                let hit = self.board.score(locked_theta, locked_r);
                self.state.phase = AimPhase::Locked {
                    locked_theta,
                    locked_r,
                    hold_remaining: LOCK_HOLD_SECS,
                };
                log::info!(
                    "Throw locked: {} {} ({} pts) at theta={:.3} r={:.3}",
                    hit.ring.as_str(),
                    hit.label,
                    hit.total,
                    locked_theta,
                    locked_r
                );
                Some(hit)
            }
            AimPhase::Locked { .. } => {
                log::debug!("Confirm ignored: throw already locked");
                None
            }
        }
    }
}

/// Apply one frame of input, then advance by `dt`
///
/// A completed throw is forwarded to `sink`. Returns true if one was.
pub fn tick<S: ThrowSink + ?Sized>(
    engine: &mut AimEngine,
    input: &TickInput,
    dt: f32,
    sink: &mut S,
) -> bool {
    let mut thrown = false;
    if input.confirm {
        if let Some(hit) = engine.confirm() {
            sink.submit_throw(hit);
            thrown = true;
        }
    }
    engine.advance(dt);
    thrown
}
