//! Presentation settings
//!
//! Loaded once at startup from `<config_dir>/super_mario_game/settings.json`.
//! Gameplay values are constants and cannot be changed here.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = "super_mario_game";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    InvalidValue(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid setting: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::ParseError(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Integer window scale; `None` picks the largest that fits the display
    pub window_scale: Option<u32>,
    pub asset_dir: PathBuf,
    /// 0.0 - 1.0
    pub music_volume: f32,
    /// 0.0 - 1.0
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window_scale: None,
            asset_dir: PathBuf::from("assets"),
            music_volume: 0.5,
            sfx_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// `<config_dir>/super_mario_game/settings.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            info!("No config directory on this platform, using default settings");
            return Settings::default();
        };

        if !path.exists() {
            info!("No settings file at {}, using defaults", path.display());
            return Settings::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.window_scale == Some(0) {
            return Err(SettingsError::InvalidValue("window_scale must be at least 1".to_string()));
        }
        for (name, volume) in [("music_volume", self.music_volume), ("sfx_volume", self.sfx_volume)] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(SettingsError::InvalidValue(format!(
                    "{} must be between 0 and 1, got {}",
                    name, volume
                )));
            }
        }
        Ok(())
    }

    /// Volume in SDL_mixer units (0-128), honouring mute
    pub fn mixer_volume(&self, volume: f32) -> i32 {
        if self.muted {
            0
        } else {
            (volume * 128.0).round() as i32
        }
    }
}
