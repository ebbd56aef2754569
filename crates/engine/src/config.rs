//! Animation run configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file named by
//! `ASCII_ANIM_CONFIG`, then individual environment variables:
//!
//! - `ASCII_ANIM_WIDTH` / `ASCII_ANIM_HEIGHT`: grid size in cells
//! - `ASCII_ANIM_FRAMES`: number of frames to run
//! - `ASCII_ANIM_FPS`: target frames per second
//! - `ASCII_ANIM_START_DELAY_MS`: pause before the first frame
//! - `ASCII_ANIM_FRAME_COUNTER`: `1`/`true` or `0`/`false`
//!
//! ```toml
//! width = 60
//! height = 20
//! frames = 120
//! fps = 12.0
//! show_frame_counter = false
//! ```
//!
//! Malformed values are configuration errors; nothing is silently replaced by
//! a default.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{Grid, GridError};
use crate::types::{
    DEFAULT_FPS, DEFAULT_FRAMES, DEFAULT_HEIGHT, DEFAULT_START_DELAY_MS, DEFAULT_WIDTH,
};

pub const ENV_CONFIG: &str = "ASCII_ANIM_CONFIG";
pub const ENV_WIDTH: &str = "ASCII_ANIM_WIDTH";
pub const ENV_HEIGHT: &str = "ASCII_ANIM_HEIGHT";
pub const ENV_FRAMES: &str = "ASCII_ANIM_FRAMES";
pub const ENV_FPS: &str = "ASCII_ANIM_FPS";
pub const ENV_START_DELAY_MS: &str = "ASCII_ANIM_START_DELAY_MS";
pub const ENV_FRAME_COUNTER: &str = "ASCII_ANIM_FRAME_COUNTER";

/// Errors detected before any frame runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("frame count must be positive")]
    InvalidFrameCount,
    #[error("frames per second must give a positive, representable frame interval, got {0}")]
    InvalidFps(f64),
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parameters of one animation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimConfig {
    /// Grid columns
    pub width: u16,
    /// Grid rows
    pub height: u16,
    /// Frames to draw before stopping
    pub frames: u64,
    /// Target frame rate
    pub fps: f64,
    /// Pause before the first frame, in milliseconds
    pub start_delay_ms: u64,
    /// Print `Frame: n/N` under every frame
    pub show_frame_counter: bool,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames: DEFAULT_FRAMES,
            fps: DEFAULT_FPS,
            start_delay_ms: DEFAULT_START_DELAY_MS,
            show_frame_counter: true,
        }
    }
}

impl AnimConfig {
    /// Build from defaults, the optional config file and environment variables.
    ///
    /// The result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(ENV_CONFIG) {
            Ok(path) if !path.trim().is_empty() => Self::load_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Override fields from variables returned by `lookup`.
    ///
    /// Unset or blank variables leave the field alone.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, ENV_WIDTH)? {
            self.width = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_HEIGHT)? {
            self.height = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_FRAMES)? {
            self.frames = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_FPS)? {
            self.fps = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_START_DELAY_MS)? {
            self.start_delay_ms = v;
        }
        if let Some(raw) = non_blank(&lookup, ENV_FRAME_COUNTER) {
            self.show_frame_counter = match raw.to_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        key: ENV_FRAME_COUNTER,
                        value: raw,
                    })
                }
            };
        }
        Ok(())
    }

    /// Reject configurations that cannot produce a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Grid::new owns the dimension rule.
        Grid::new(self.width, self.height)?;
        if self.frames == 0 {
            return Err(ConfigError::InvalidFrameCount);
        }
        self.frame_interval()?;
        Ok(())
    }

    /// Delay between frames, `1 / fps` seconds.
    ///
    /// Fails for rates that are not positive and finite, and for rates so
    /// small that `1 / fps` does not fit in a `Duration`.
    pub fn frame_interval(&self) -> Result<Duration, ConfigError> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        Duration::try_from_secs_f64(1.0 / self.fps)
            .map_err(|_| ConfigError::InvalidFps(self.fps))
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup, key) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value: raw }),
    }
}
