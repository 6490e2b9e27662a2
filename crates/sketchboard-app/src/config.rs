//! Host configuration.

use crate::error::{AppResult, read_to_string};
use serde::{Deserialize, Serialize};
use sketchboard_core::EngineConfig;
use std::path::{Path, PathBuf};

/// Application configuration, loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Initial tool and colour settings.
    pub engine: EngineConfig,
    /// Where the final committed buffer is written.
    pub output: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            engine: EngineConfig::default(),
            output: PathBuf::from("sketch.png"),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let config = Self::from_json(&read_to_string(path)?)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
