//! Startup configuration
//!
//! Read once from `brickbust.json` in the working directory, then passed
//! by reference to everything that needs it. Nothing here changes at runtime.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Rect;

/// Why a config file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the level and sprite manifest
    pub data_dir: PathBuf,
    /// Level file name inside `data_dir`
    pub level: String,
    /// Sprite manifest file name inside `data_dir`
    pub sprites: String,
    /// Window title prefix
    pub title: String,
    /// Initial window position on screen (logical pixels)
    pub window_position: Option<(i32, i32)>,
    /// Play area size (logical pixels); also the window's inner size
    pub play_area: (u32, u32),
    /// Simulation rate
    pub tick_hz: u32,
    /// Starting lives
    pub lives: u8,
    /// Hide the OS cursor over the window
    pub hide_cursor: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            level: "l2.txt".to_string(),
            sprites: "sprites.json".to_string(),
            title: "Brickbust 1.0.0d".to_string(),
            window_position: Some((350, 200)),
            play_area: (PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT),
            tick_hz: TICK_HZ,
            lives: START_LIVES,
            hide_cursor: true,
        }
    }
}

impl Config {
    /// File looked up in the working directory
    pub const FILE_NAME: &'static str = "brickbust.json";

    /// Load `brickbust.json` from the working directory, falling back to
    /// defaults if it is missing or unreadable
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {} found, using default config", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and parse `path` without falling back to defaults
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        Ok(config.sanitized())
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.tick_hz == 0 {
            log::warn!("tick_hz must be positive, using {}", defaults.tick_hz);
            self.tick_hz = defaults.tick_hz;
        }
        if self.play_area.0 == 0 || self.play_area.1 == 0 {
            log::warn!("play_area must be non-empty, using {:?}", defaults.play_area);
            self.play_area = defaults.play_area;
        }
        if self.lives == 0 {
            log::warn!("lives must be at least 1, using {}", defaults.lives);
            self.lives = defaults.lives;
        }
        self
    }

    pub fn level_path(&self) -> PathBuf {
        self.data_dir.join(&self.level)
    }

    pub fn sprites_path(&self) -> PathBuf {
        self.data_dir.join(&self.sprites)
    }

    /// Bounds the ball moves within
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.play_area.0 as i32, self.play_area.1 as i32)
    }

    /// Fixed simulation timestep in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }
}
