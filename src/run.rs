//! Run bookkeeping
//!
//! Tracks rounds, darts left and the score target. Fed one `HitResult` per
//! completed throw; the aim engine never reads any of this.

use serde::{Deserialize, Serialize};

use crate::sim::{HitResult, ThrowSink};

/// Darts thrown per round
pub const DARTS_PER_ROUND: u32 = 9;
/// Score needed to clear the first round
pub const STARTING_TARGET: u32 = 75;
/// Target multiplier applied between rounds
pub const TARGET_GROWTH: f32 = 1.25;

/// Where the run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Darts remain in the current round
    Aiming,
    /// Target reached with the round's last dart
    RoundComplete,
    /// Target missed, run is finished
    RunOver,
}

/// Round/score state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTracker {
    pub round: u32,
    pub darts_per_round: u32,
    pub darts_left: u32,
    pub target_score: u32,
    /// Throws this round, newest first
    pub throws: Vec<HitResult>,
    /// Overflow above the target, banked at round end
    pub coins: u32,
    pub phase: RunPhase,
}

impl Default for RunTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RunTracker {
    pub fn new() -> Self {
        Self {
            round: 1,
            darts_per_round: DARTS_PER_ROUND,
            darts_left: DARTS_PER_ROUND,
            target_score: STARTING_TARGET,
            throws: Vec::with_capacity(DARTS_PER_ROUND as usize),
            coins: 0,
            phase: RunPhase::Aiming,
        }
    }

    /// Sum of this round's throws
    pub fn total_score(&self) -> u32 {
        self.throws.iter().map(|t| t.total).sum()
    }

    /// Points still missing to reach the target
    pub fn score_needed(&self) -> u32 {
        self.target_score.saturating_sub(self.total_score())
    }

    /// Points above the target
    pub fn score_over(&self) -> u32 {
        self.total_score().saturating_sub(self.target_score)
    }

    /// Record a throw. Returns false if the round is not accepting darts.
    pub fn record_throw(&mut self, hit: HitResult) -> bool {
        if self.phase != RunPhase::Aiming || self.darts_left == 0 {
            log::debug!("Throw {} ignored in phase {:?}", hit.label, self.phase);
            return false;
        }

        self.throws.insert(0, hit);
        self.darts_left -= 1;

        if self.darts_left == 0 {
            let total = self.total_score();
            if total >= self.target_score {
                self.coins += total - self.target_score;
                self.phase = RunPhase::RoundComplete;
                log::info!(
                    "Round {} complete: {} / {} (coins {})",
                    self.round,
                    total,
                    self.target_score,
                    self.coins
                );
            } else {
                self.phase = RunPhase::RunOver;
                log::info!(
                    "Run over in round {}: {} / {}",
                    self.round,
                    total,
                    self.target_score
                );
            }
        }
        true
    }

    /// Move on after a cleared round. Returns false unless the round is complete.
    pub fn start_next_round(&mut self) -> bool {
        if self.phase != RunPhase::RoundComplete {
            return false;
        }

        self.round += 1;
        self.target_score = (self.target_score as f32 * TARGET_GROWTH).round() as u32;
        self.throws.clear();
        self.darts_left = self.darts_per_round;
        self.phase = RunPhase::Aiming;
        log::info!("Round {} target {}", self.round, self.target_score);
        true
    }

    /// Start a fresh run
    pub fn reset_run(&mut self) {
        *self = Self::new();
    }
}

impl ThrowSink for RunTracker {
    fn submit_throw(&mut self, hit: HitResult) {
        self.record_throw(hit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::score;
    use std::f32::consts::FRAC_PI_2;

    fn treble_twenty() -> HitResult {
        score(FRAC_PI_2, 0.60)
    }

    fn miss() -> HitResult {
        HitResult::miss()
    }

    #[test]
    fn test_new_run() {
        let run = RunTracker::new();
        assert_eq!(run.round, 1);
        assert_eq!(run.darts_left, 9);
        assert_eq!(run.target_score, 75);
        assert_eq!(run.phase, RunPhase::Aiming);
        assert_eq!(run.score_needed(), 75);
        assert_eq!(run.score_over(), 0);
    }

    #[test]
    fn test_throws_are_newest_first() {
        let mut run = RunTracker::new();
        run.record_throw(miss());
        run.record_throw(treble_twenty());
        assert_eq!(run.throws[0].label, "T20");
        assert_eq!(run.throws[1].label, "MISS");
        assert_eq!(run.darts_left, 7);
        assert_eq!(run.total_score(), 60);
        assert_eq!(run.score_needed(), 15);
    }

    #[test]
    fn test_round_complete_banks_overflow() {
        let mut run = RunTracker::new();
        for _ in 0..9 {
            assert!(run.record_throw(treble_twenty()));
        }
        assert_eq!(run.phase, RunPhase::RoundComplete);
        assert_eq!(run.total_score(), 540);
        assert_eq!(run.score_over(), 465);
        assert_eq!(run.coins, 465);

        // Round is closed to further darts
        assert!(!run.record_throw(treble_twenty()));
        assert_eq!(run.throws.len(), 9);
    }

    #[test]
    fn test_exact_target_completes_round() {
        let mut run = RunTracker::new();
        // Three outer bulls land exactly on 75
        for _ in 0..3 {
            run.record_throw(score(FRAC_PI_2, 0.06));
        }
        for _ in 0..6 {
            run.record_throw(miss());
        }
        assert_eq!(run.total_score(), 75);
        assert_eq!(run.phase, RunPhase::RoundComplete);
        assert_eq!(run.coins, 0);
    }

    #[test]
    fn test_run_over_when_short() {
        let mut run = RunTracker::new();
        for _ in 0..9 {
            run.record_throw(miss());
        }
        assert_eq!(run.phase, RunPhase::RunOver);
        assert_eq!(run.coins, 0);
        assert!(!run.start_next_round());
        assert!(!run.record_throw(treble_twenty()));
    }

    #[test]
    fn test_next_round_raises_target() {
        let mut run = RunTracker::new();
        assert!(!run.start_next_round());
        for _ in 0..9 {
            run.record_throw(treble_twenty());
        }
        assert!(run.start_next_round());
        assert_eq!(run.round, 2);
        // 75 * 1.25 = 93.75
        assert_eq!(run.target_score, 94);
        assert_eq!(run.darts_left, 9);
        assert!(run.throws.is_empty());
        assert_eq!(run.phase, RunPhase::Aiming);
        assert_eq!(run.coins, 465);
    }

    #[test]
    fn test_reset_run() {
        let mut run = RunTracker::new();
        for _ in 0..9 {
            run.record_throw(treble_twenty());
        }
        run.start_next_round();
        run.reset_run();
        assert_eq!(run.round, 1);
        assert_eq!(run.target_score, 75);
        assert_eq!(run.coins, 0);
        assert_eq!(run.darts_left, 9);
        assert_eq!(run.phase, RunPhase::Aiming);
    }

    #[test]
    fn test_tracker_as_throw_sink() {
        let mut run = RunTracker::new();
        run.submit_throw(treble_twenty());
        assert_eq!(run.darts_left, 8);
    }
}
