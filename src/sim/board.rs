//! Dartboard geometry and scoring
//!
//! The board is described in polar space around its center:
//! - radius: board units, the double ring's outer edge at 1.0
//! - theta: bearing in radians, 0 at 3 o'clock, π/2 at 12 o'clock
//!
//! Segments are laid out clockwise from the top, so the wedge index grows as
//! theta decreases.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{cartesian_to_polar, normalize_angle_positive};

/// Number of angular wedges on the board
pub const SEGMENT_COUNT: usize = 20;

/// Angular width of one wedge
pub const SEGMENT_WIDTH: f32 = TAU / SEGMENT_COUNT as f32;

/// Dartboard order clockwise from top (20)
pub const BOARD_NUMBERS: [u32; SEGMENT_COUNT] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Scoring band a throw landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ring {
    Miss,
    BullInner,
    BullOuter,
    Single,
    Double,
    Triple,
}

impl Ring {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ring::Miss => "MISS",
            Ring::BullInner => "BULL_INNER",
            Ring::BullOuter => "BULL_OUTER",
            Ring::Single => "SINGLE",
            Ring::Double => "DOUBLE",
            Ring::Triple => "TRIPLE",
        }
    }

    /// Score multiplier applied to the segment number
    pub fn multiplier(&self) -> u32 {
        match self {
            Ring::Miss => 0,
            Ring::BullInner | Ring::BullOuter | Ring::Single => 1,
            Ring::Double => 2,
            Ring::Triple => 3,
        }
    }

    /// Label prefix for segment hits ("D20", "T5", "13")
    fn prefix(&self) -> &'static str {
        match self {
            Ring::Double => "D",
            Ring::Triple => "T",
            _ => "",
        }
    }
}

/// Outcome of one completed throw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitResult {
    pub ring: Ring,
    /// Wedge index 0..20 (0 = 20 at top); None for misses and bulls
    pub segment_index: Option<usize>,
    /// Segment number, or 25/50 for the bulls
    pub number: u32,
    pub multiplier: u32,
    pub total: u32,
    /// e.g. "T20", "D5", "25", "50", "MISS"
    pub label: String,
}

impl HitResult {
    pub fn miss() -> Self {
        Self {
            ring: Ring::Miss,
            segment_index: None,
            number: 0,
            multiplier: 0,
            total: 0,
            label: "MISS".to_string(),
        }
    }

    fn bull(ring: Ring, value: u32) -> Self {
        Self {
            ring,
            segment_index: None,
            number: value,
            multiplier: 1,
            total: value,
            label: value.to_string(),
        }
    }

    fn segment(ring: Ring, index: usize) -> Self {
        let number = BOARD_NUMBERS[index];
        let multiplier = ring.multiplier();
        Self {
            ring,
            segment_index: Some(index),
            number,
            multiplier,
            total: number * multiplier,
            label: format!("{}{}", ring.prefix(), number),
        }
    }
}

/// A radial band of the board (inclusive on both edges)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingBand {
    pub inner: f32,
    pub outer: f32,
}

impl RingBand {
    pub const fn new(inner: f32, outer: f32) -> Self {
        Self { inner, outer }
    }

    #[inline]
    pub fn contains(&self, r: f32) -> bool {
        r >= self.inner && r <= self.outer
    }
}

/// Named radii of a dartboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub bull_inner_radius: f32,
    pub bull_outer_radius: f32,
    pub triple: RingBand,
    pub double: RingBand,
}

/// Board proportions used by the game (double outer edge = 1.0)
pub const STANDARD_BOARD: BoardGeometry = BoardGeometry {
    bull_inner_radius: 0.035,
    bull_outer_radius: 0.085,
    triple: RingBand::new(0.57, 0.64),
    double: RingBand::new(0.93, 1.0),
};

impl Default for BoardGeometry {
    fn default() -> Self {
        STANDARD_BOARD
    }
}

impl BoardGeometry {
    /// Outermost scoring radius; anything beyond is a miss
    #[inline]
    pub fn playable_radius(&self) -> f32 {
        self.double.outer
    }

    /// Classify a polar board position. Total over all inputs.
    pub fn score(&self, theta: f32, r: f32) -> HitResult {
        if r > self.playable_radius() {
            return HitResult::miss();
        }
        if r <= self.bull_inner_radius {
            return HitResult::bull(Ring::BullInner, 50);
        }
        if r <= self.bull_outer_radius {
            return HitResult::bull(Ring::BullOuter, 25);
        }

        let ring = if self.double.contains(r) {
            Ring::Double
        } else if self.triple.contains(r) {
            Ring::Triple
        } else {
            Ring::Single
        };
        HitResult::segment(ring, segment_index_from_theta(theta))
    }

    /// Score a board-local cartesian point
    pub fn score_point(&self, pos: Vec2) -> HitResult {
        let (r, theta) = cartesian_to_polar(pos);
        self.score(theta, r)
    }
}

/// Score a polar position on the standard board
pub fn score(theta: f32, r: f32) -> HitResult {
    STANDARD_BOARD.score(theta, r)
}

/// Wedge index for a bearing: 0 is centered on 12 o'clock, counting clockwise
pub fn segment_index_from_theta(theta: f32) -> usize {
    // Clockwise rotation from straight up
    let delta = normalize_angle_positive(FRAC_PI_2 - theta);
    let index = ((delta + SEGMENT_WIDTH / 2.0) / SEGMENT_WIDTH).floor() as usize;
    index % SEGMENT_COUNT
}

/// Bearing of a wedge's center line
pub fn segment_center_theta(index: usize) -> f32 {
    crate::normalize_angle(FRAC_PI_2 - (index % SEGMENT_COUNT) as f32 * SEGMENT_WIDTH)
}
