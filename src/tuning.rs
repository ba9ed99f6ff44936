//! Gameplay tuning
//!
//! Every constant the simulation reads lives here so a run can be
//! reconfigured from a JSON document without recompiling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable gameplay configuration for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub game_width: f32,
    pub game_height: f32,

    // === Sizes ===
    pub bird_width: f32,
    pub bird_height: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,

    // === Physics (per tick) ===
    /// Pipe scroll magnitude (pipes move left by this much)
    pub scroll_speed: f32,
    pub gravity: f32,
    pub max_fall: f32,
    /// Flap velocity, negative is up
    pub flap_impulse: f32,

    // === Timing ===
    pub spawn_interval_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,

            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,

            scroll_speed: SCROLL_SPEED,
            gravity: GRAVITY,
            max_fall: MAX_FALL,
            flap_impulse: FLAP_IMPULSE,

            spawn_interval_secs: SPAWN_INTERVAL_SECS,
        }
    }
}

impl Tuning {
    /// Vertical clearance between the two pipes of a pair
    pub fn gap_size(&self) -> f32 {
        self.game_height / 4.0
    }

    /// Bird position at session start and after every reset
    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(self.game_width / 8.0, self.game_height / 2.0)
    }

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning from {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
