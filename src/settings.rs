//! Difficulty presets and game settings
//!
//! Settings are read from an optional JSON file; anything missing falls
//! back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{RESPAWN_DELAY_MS, TICK_INTERVAL_MS};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Preset by menu name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Paddle width relative to the base width
    pub fn paddle_width_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 0.75,
            Difficulty::Hard => 0.5,
        }
    }

    /// Ball speed relative to the base speed
    pub fn ball_speed_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset the headless demo plays
    pub difficulty: Difficulty,
    /// Delay between ticks during play (ms)
    pub tick_interval_ms: u64,
    /// Delay before a new ball after a lost life (ms)
    pub respawn_delay_ms: u64,
    /// Autopilot RNG seed
    pub demo_seed: u64,
    /// Upper bound on ticks the headless demo runs
    pub demo_max_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            tick_interval_ms: TICK_INTERVAL_MS,
            respawn_delay_ms: RESPAWN_DELAY_MS,
            demo_seed: 12345,
            demo_max_ticks: 20_000,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Intervals are clamped to at least 1 ms.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace the preset by name. Unknown names are logged and ignored.
    pub fn override_difficulty(&mut self, name: &str) {
        match Difficulty::parse(name) {
            Some(difficulty) => self.difficulty = difficulty,
            None => log::warn!(
                "Unknown difficulty {:?}, keeping {}",
                name,
                self.difficulty.as_str()
            ),
        }
    }

    fn sanitized(mut self) -> Self {
        self.tick_interval_ms = self.tick_interval_ms.max(1);
        self.respawn_delay_ms = self.respawn_delay_ms.max(1);
        self
    }
}
