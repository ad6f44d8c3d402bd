//! Player settings
//!
//! Read from a RON file in the platform config directory. A missing or
//! broken file never stops the game; it just means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::SHAKE_THRESHOLD;

/// Name of the settings file
pub const SETTINGS_FILE: &str = "reflex-rush.ron";

/// Errors reading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Accelerometer magnitude above which a shake is detected
    pub shake_threshold: f32,
    /// Play cues and ambience
    pub audio_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f64,
    /// SFX volume multiplier (0.0 - 1.0)
    pub sfx_volume: f64,
    /// Fixed seed for the instruction draw; entropy when unset
    pub seed: Option<u64>,
    /// How long the event loop waits for input per frame
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shake_threshold: SHAKE_THRESHOLD,
            audio_enabled: true,
            master_volume: 1.0,
            sfx_volume: 0.7,
            seed: None,
            tick_rate_ms: 50,
        }
    }
}

impl Settings {
    /// Parse and validate settings text
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = ron::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_or_default(&settings_path())
    }

    /// Load from `path`; a missing, unreadable or invalid file yields defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Settings loaded from {:?}", path);
                settings
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.shake_threshold.is_nan() || self.shake_threshold <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "shake_threshold",
                reason: format!("must be positive, got {}", self.shake_threshold),
            });
        }
        for (field, volume) in [("master_volume", self.master_volume), ("sfx_volume", self.sfx_volume)] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be within 0.0 - 1.0, got {}", volume),
                });
            }
        }
        if self.tick_rate_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_rate_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Where the settings file lives
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "reflexrush", "ReflexRush") {
        proj_dirs.config_dir().join(SETTINGS_FILE)
    } else {
        PathBuf::from(SETTINGS_FILE)
    }
}
