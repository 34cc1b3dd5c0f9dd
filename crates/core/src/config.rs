//! Generation parameters, their TOML loading, and up-front validation.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use toml::de::Error as TomlError;

/// Half-open draw range `[min, max)`. A range with `min == max` always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

impl SizeRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub corridor_count: u32,
    pub corridor_length: SizeRange,
    pub corridor_width: SizeRange,
    pub room_walk_steps: u32,
    /// Share of corridor endpoints that become ordinary rooms, in `(0, 1]`.
    pub room_fraction: f64,
    pub random_seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            corridor_count: 5,
            corridor_length: SizeRange::new(10, 15),
            corridor_width: SizeRange::new(1, 3),
            room_walk_steps: 40,
            room_fraction: 0.8,
            random_seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("corridor_length", self.corridor_length)?;
        check_range("corridor_width", self.corridor_width)?;
        if self.corridor_width.min == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if !self.room_fraction.is_finite()
            || self.room_fraction <= 0.0
            || self.room_fraction > 1.0
        {
            return Err(ConfigError::RoomFractionOutOfRange(self.room_fraction));
        }
        Ok(())
    }

    /// Parse a TOML document. Missing keys fall back to [`GenerationConfig::default`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }
}

fn check_range(field: &'static str, range: SizeRange) -> Result<(), ConfigError> {
    if range.min > range.max {
        return Err(ConfigError::InvertedRange { field, min: range.min, max: range.max });
    }
    Ok(())
}

/// Describes why a configuration was rejected before generation started.
#[derive(Debug)]
pub enum ConfigError {
    /// A `[min, max)` range has `min > max`.
    InvertedRange { field: &'static str, min: u32, max: u32 },
    /// Corridors must be at least one cell wide.
    ZeroWidth,
    RoomFractionOutOfRange(f64),
    /// Underlying I/O failure while reading a config file.
    Io(io::Error),
    /// The file is not valid TOML or does not match the config schema.
    Parse(TomlError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { field, min, max } => {
                write!(f, "{field} range is inverted: min {min} > max {max}")
            }
            Self::ZeroWidth => write!(f, "corridor_width min must be at least 1"),
            Self::RoomFractionOutOfRange(value) => {
                write!(f, "room_fraction must lie in (0, 1], got {value}")
            }
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}
