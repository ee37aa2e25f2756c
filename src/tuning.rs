//! Difficulty tuning
//!
//! Aim speeds ramp up the longer a phase stays active, then saturate.
//! Ramps are per-phase: re-entering a phase starts again from the base speed.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::{ANGLE_PHASE_RADIUS, BOARD_RADIUS};
use crate::error::{ConfigError, ConfigResult};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    #[value(alias = "medium", alias = "med")]
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "normal" | "medium" | "med" => Some(DifficultyPreset::Normal),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Balance table for this preset
    pub fn params(&self) -> DifficultyParams {
        match self {
            DifficultyPreset::Easy => DifficultyParams {
                base_angular_speed: 1.2,
                max_angular_speed: 2.6,
                angular_ramp: 0.3,
                base_radial_speed: 0.8,
                max_radial_speed: 1.8,
                radial_ramp: 0.25,
                angle_jitter_amplitude: 0.02,
                angle_jitter_frequency: 5.0,
                radius_jitter_amplitude: 0.01,
                radius_jitter_frequency: 6.0,
                // Oscillation never leaves the board
                radius_max: BOARD_RADIUS,
            },
            DifficultyPreset::Normal => DifficultyParams::default(),
            DifficultyPreset::Hard => DifficultyParams {
                base_angular_speed: 2.4,
                max_angular_speed: 6.0,
                angular_ramp: 1.0,
                base_radial_speed: 1.6,
                max_radial_speed: 4.0,
                radial_ramp: 0.8,
                angle_jitter_amplitude: 0.07,
                angle_jitter_frequency: 9.0,
                radius_jitter_amplitude: 0.035,
                radius_jitter_frequency: 11.0,
                radius_max: BOARD_RADIUS * 1.2,
            },
        }
    }
}

/// Immutable difficulty configuration for one engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyParams {
    /// Angular speed at phase entry (radians/sec)
    pub base_angular_speed: f32,
    /// Angular speed cap (radians/sec)
    pub max_angular_speed: f32,
    /// Angular speed gained per second spent in the angle phase
    pub angular_ramp: f32,
    /// Radial speed at phase entry (board units/sec)
    pub base_radial_speed: f32,
    /// Radial speed cap (board units/sec)
    pub max_radial_speed: f32,
    /// Radial speed gained per second spent in the radius phase
    pub radial_ramp: f32,
    /// Peak angular jitter (radians)
    pub angle_jitter_amplitude: f32,
    /// Angular jitter frequency (radians/sec)
    pub angle_jitter_frequency: f32,
    /// Peak radial jitter (board units)
    pub radius_jitter_amplitude: f32,
    /// Radial jitter frequency (radians/sec)
    pub radius_jitter_frequency: f32,
    /// Outer bound of the radius oscillation; above BOARD_RADIUS permits misses.
    /// Never below ANGLE_PHASE_RADIUS.
    pub radius_max: f32,
}

impl Default for DifficultyParams {
    fn default() -> Self {
        Self {
            base_angular_speed: 1.8,
            max_angular_speed: 4.0,
            angular_ramp: 0.6,
            base_radial_speed: 1.2,
            max_radial_speed: 3.0,
            radial_ramp: 0.5,
            angle_jitter_amplitude: 0.04,
            angle_jitter_frequency: 7.0,
            radius_jitter_amplitude: 0.02,
            radius_jitter_frequency: 9.0,
            radius_max: BOARD_RADIUS * 1.1,
        }
    }
}

impl DifficultyParams {
    /// Angular speed after `time_in_phase` seconds of angle aiming
    #[inline]
    pub fn angular_speed(&self, time_in_phase: f32) -> f32 {
        (self.base_angular_speed + self.angular_ramp * time_in_phase).min(self.max_angular_speed)
    }

    /// Radial speed after `time_in_phase` seconds of radius aiming
    #[inline]
    pub fn radial_speed(&self, time_in_phase: f32) -> f32 {
        (self.base_radial_speed + self.radial_ramp * time_in_phase).min(self.max_radial_speed)
    }

    /// Check every field is finite and each ramped quantity has base <= max
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("base_angular_speed", self.base_angular_speed),
            ("max_angular_speed", self.max_angular_speed),
            ("angular_ramp", self.angular_ramp),
            ("base_radial_speed", self.base_radial_speed),
            ("max_radial_speed", self.max_radial_speed),
            ("radial_ramp", self.radial_ramp),
            ("angle_jitter_amplitude", self.angle_jitter_amplitude),
            ("angle_jitter_frequency", self.angle_jitter_frequency),
            ("radius_jitter_amplitude", self.radius_jitter_amplitude),
            ("radius_jitter_frequency", self.radius_jitter_frequency),
            ("radius_max", self.radius_max),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDifficulty(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if self.base_angular_speed > self.max_angular_speed {
            return Err(ConfigError::InvalidDifficulty(format!(
                "base_angular_speed ({}) exceeds max_angular_speed ({})",
                self.base_angular_speed, self.max_angular_speed
            )));
        }
        if self.base_radial_speed > self.max_radial_speed {
            return Err(ConfigError::InvalidDifficulty(format!(
                "base_radial_speed ({}) exceeds max_radial_speed ({})",
                self.base_radial_speed, self.max_radial_speed
            )));
        }
        // The angle phase pins the cursor at ANGLE_PHASE_RADIUS, which must stay in range
        if self.radius_max < ANGLE_PHASE_RADIUS {
            return Err(ConfigError::InvalidDifficulty(format!(
                "radius_max ({}) is below the aiming radius ({})",
                self.radius_max, ANGLE_PHASE_RADIUS
            )));
        }
        Ok(())
    }
}
