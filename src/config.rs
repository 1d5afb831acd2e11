//! Runtime configuration from environment variables (and an optional `.env`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::raster::{MiniMapConfig, ZoomConfig};
use crate::term::game_view::TERMINAL_MINIMAP_CELL;
use crate::types::TICK_MS;

const DEFAULT_KEY_RELEASE_MS: u32 = 150;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: expected a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be positive")]
    NotPositive { key: &'static str },
    #[error("zoom range is inverted: min {min} > max {max}")]
    InvertedZoomRange { min: f32, max: f32 },
    #[error("default zoom {zoom} is outside [{min}, {max}]")]
    ZoomOutOfRange { zoom: f32, min: f32, max: f32 },
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub zoom: ZoomConfig,
    /// World units per mini-map cell.
    pub minimap_cell: i32,
    /// Screen pixels per mini-map cell edge.
    pub minimap_scale: i32,
    pub tick_ms: u32,
    /// Held keys auto-release after this long without a repeat.
    pub key_release_ms: u32,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            minimap_cell: TERMINAL_MINIMAP_CELL,
            minimap_scale: 1,
            tick_ms: TICK_MS,
            key_release_ms: DEFAULT_KEY_RELEASE_MS,
            log_dir: default_log_dir(),
        }
    }
}

impl AppConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PIXEL_ROOMS_ZOOM` - starting and reset zoom (default: 1.0)
    /// - `PIXEL_ROOMS_MIN_ZOOM` / `PIXEL_ROOMS_MAX_ZOOM` - zoom range (default: 0.5 / 5.0)
    /// - `PIXEL_ROOMS_ZOOM_STEP` - multiplicative zoom step (default: 1.2)
    /// - `PIXEL_ROOMS_MINIMAP_CELL` - world units per mini-map cell (default: 20)
    /// - `PIXEL_ROOMS_MINIMAP_SCALE` - pixels per mini-map cell (default: 1)
    /// - `PIXEL_ROOMS_TICK_MS` - frame time in milliseconds (default: 16)
    /// - `PIXEL_ROOMS_KEY_RELEASE_MS` - held-key timeout (default: 150)
    /// - `PIXEL_ROOMS_LOG_DIR` - directory for `pixel-rooms.log`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(min) = read_var::<f32>(&lookup, "PIXEL_ROOMS_MIN_ZOOM")? {
            config.zoom.min = positive("PIXEL_ROOMS_MIN_ZOOM", min)?;
        }
        if let Some(max) = read_var::<f32>(&lookup, "PIXEL_ROOMS_MAX_ZOOM")? {
            config.zoom.max = positive("PIXEL_ROOMS_MAX_ZOOM", max)?;
        }
        if let Some(zoom) = read_var::<f32>(&lookup, "PIXEL_ROOMS_ZOOM")? {
            config.zoom.default = positive("PIXEL_ROOMS_ZOOM", zoom)?;
        }
        if let Some(step) = read_var::<f32>(&lookup, "PIXEL_ROOMS_ZOOM_STEP")? {
            config.zoom.step = positive("PIXEL_ROOMS_ZOOM_STEP", step)?;
        }
        if let Some(cell) = read_var::<i32>(&lookup, "PIXEL_ROOMS_MINIMAP_CELL")? {
            config.minimap_cell = positive("PIXEL_ROOMS_MINIMAP_CELL", cell)?;
        }
        if let Some(scale) = read_var::<i32>(&lookup, "PIXEL_ROOMS_MINIMAP_SCALE")? {
            config.minimap_scale = positive("PIXEL_ROOMS_MINIMAP_SCALE", scale)?;
        }
        if let Some(tick) = read_var::<u32>(&lookup, "PIXEL_ROOMS_TICK_MS")? {
            config.tick_ms = positive("PIXEL_ROOMS_TICK_MS", tick)?;
        }
        if let Some(ms) = read_var::<u32>(&lookup, "PIXEL_ROOMS_KEY_RELEASE_MS")? {
            config.key_release_ms = ms;
        }
        if let Some(dir) = lookup("PIXEL_ROOMS_LOG_DIR").filter(|d| !d.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ZoomConfig { min, max, default, .. } = self.zoom;
        if min > max {
            return Err(ConfigError::InvertedZoomRange { min, max });
        }
        if !(min..=max).contains(&default) {
            return Err(ConfigError::ZoomOutOfRange { zoom: default, min, max });
        }
        Ok(())
    }

    pub fn minimap(&self) -> MiniMapConfig {
        MiniMapConfig::covering_world(self.minimap_cell, self.minimap_scale)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn positive<T>(key: &'static str, value: T) -> Result<T, ConfigError>
where
    T: PartialOrd + Default,
{
    // NaN fails this comparison too.
    if value > T::default() {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { key })
    }
}

/// Platform cache directory for logs, falling back to the temp dir.
fn default_log_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Caches/pixel-rooms/logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("pixel-rooms/logs");
        } else if let Some(home) = env::var_os("HOME") {
            return PathBuf::from(home).join(".cache/pixel-rooms/logs");
        }
    }

    env::temp_dir().join("pixel-rooms")
}
