//! Deterministic aim simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `advance(dt)`
//! - Jitter is a function of elapsed time and a construction seed
//! - No rendering, platform or run-bookkeeping dependencies

pub mod board;
pub mod jitter;
pub mod state;
pub mod tick;

pub use board::{
    BOARD_NUMBERS, BoardGeometry, HitResult, Ring, RingBand, SEGMENT_COUNT, SEGMENT_WIDTH,
    STANDARD_BOARD, score, segment_center_theta, segment_index_from_theta,
};
pub use jitter::{AimJitter, Jitter};
pub use state::{AimEngine, AimPhase, AimState, Phase, RadialDirection};
pub use tick::{ThrowSink, TickInput, tick};
