//! Game settings and preferences
//!
//! Read once at startup from an optional JSON file; never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SELECTABLE_LEVELS;
use crate::error::Result;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Level preselected for the headless driver (1-5)
    pub starting_level: u32,
    /// Session seed; None picks one from the clock
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Balance overrides
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_level: 1,
            seed: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from `path`, or defaults when there is no file
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Clamp out-of-range values
    pub fn sanitized(mut self) -> Self {
        self.starting_level = self.starting_level.clamp(1, SELECTABLE_LEVELS);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.tuning = self.tuning.sanitized();
        self
    }
}
