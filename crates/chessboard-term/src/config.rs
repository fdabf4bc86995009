//! Configuration file loading for the terminal board.
//!
//! Settings come from `chessboard.toml` in the current directory, or from the
//! file named on the command line. Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Square colors, as 256-color terminal palette indices.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Fill for White squares.
    #[serde(default = "default_light")]
    pub light: u8,
    /// Fill for Black squares.
    #[serde(default = "default_dark")]
    pub dark: u8,
    /// Fill for selected and candidate squares.
    #[serde(default = "default_highlight")]
    pub highlight: u8,
}

fn default_light() -> u8 {
    255
}

fn default_dark() -> u8 {
    130
}

fn default_highlight() -> u8 {
    28
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            light: default_light(),
            dark: default_dark(),
            highlight: default_highlight(),
        }
    }
}

/// Terminal board configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Draw file letters and rank digits around the board.
    #[serde(default = "default_true")]
    pub show_coordinates: bool,
    /// Draw pieces as chess symbols instead of letters.
    #[serde(default)]
    pub unicode_pieces: bool,
    /// Draw without ANSI colors; highlights are shown with brackets.
    #[serde(default)]
    pub plain: bool,
    #[serde(default)]
    pub colors: Palette,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            show_coordinates: true,
            unicode_pieces: false,
            plain: false,
            colors: Palette::default(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::default_path()`]
    /// is read if present, and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::read(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the path read when none is given.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chessboard.toml")
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
