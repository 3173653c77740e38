use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default side length of the square grid.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid that still leaves room for both start cells and the food.
pub const MIN_GRID_SIZE: u16 = 10;

/// Largest grid that fits a typical terminal at two columns per cell.
pub const MAX_GRID_SIZE: u16 = 60;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Terminal columns used to draw one grid cell, so cells look square.
pub const CELL_WIDTH: u16 = 2;

/// Solid glyph for one cell (`CELL_WIDTH` columns).
pub const GLYPH_CELL: &str = "██";

const APP_DIR_NAME: &str = "duel-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Colors for every visual element.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub food: Color,
    pub user_head: Color,
    pub user_body: Color,
    pub ai_head: Color,
    pub ai_body: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Red food, green player, cyan opponent on black.
pub const THEME_CLASSIC: Theme = Theme {
    food: Color::Red,
    user_head: Color::LightGreen,
    user_body: Color::Green,
    ai_head: Color::LightCyan,
    ai_body: Color::Cyan,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    overlay_title: Color::Yellow,
    overlay_footer: Color::DarkGray,
};

/// Runtime settings, layered defaults ← config file ← command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_size: u16,
    pub tick_interval_ms: u64,
    /// Fixed RNG seed for reproducible food placement.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads the config from `explicit` if given, otherwise from the default
    /// location. A missing default file yields the built-in defaults; a
    /// missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_path(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Rejects values the game cannot run with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::InvalidGridSize {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::InvalidTickInterval {
                interval_ms: self.tick_interval_ms,
                min_ms: MIN_TICK_INTERVAL_MS,
            });
        }

        Ok(self)
    }
}

/// Returns the platform-correct default config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}
