//! Game settings and preferences
//!
//! Stored as JSON. Missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::sim::AimEngine;
use crate::tuning::{DifficultyParams, DifficultyPreset};

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty preset
    pub difficulty: DifficultyPreset,
    /// Hand-tuned table; overrides the preset when present
    pub custom_difficulty: Option<DifficultyParams>,
    /// Fixed jitter seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        Self {
            difficulty: preset,
            ..Self::default()
        }
    }

    /// Difficulty table in effect (custom table wins over the preset)
    pub fn effective_difficulty(&self) -> DifficultyParams {
        self.custom_difficulty
            .unwrap_or_else(|| self.difficulty.params())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.effective_difficulty().validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({})",
            path.display(),
            settings.difficulty.as_str()
        );
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Build an aim engine; `fallback_seed` is used when no seed is pinned
    pub fn engine(&self, fallback_seed: u64) -> AimEngine {
        AimEngine::new(self.seed.unwrap_or(fallback_seed), self.effective_difficulty())
    }
}
