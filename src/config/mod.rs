//! Configuration handling for the extraction front-ends.
//!
//! The library itself takes everything it needs per call; configuration only
//! matters to the binaries, which read it from the environment with sensible
//! development defaults. `Config::from_env` performs that loading and
//! validates the values it finds.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::extractor::{ExtractMode, ExtractOptions};

/// Environment variable names. Keeping them public lets other crates (tests,
/// build scripts) refer to them if needed later.
pub const ENV_EXTRACT_MODE: &str = "GIST_EXTRACT_MODE";
pub const ENV_MAX_CHARS: &str = "GIST_MAX_CHARS";
pub const ENV_CHAR_THRESHOLD: &str = "GIST_CHAR_THRESHOLD";

/// Default values used when environment variables are absent.
const DEFAULT_EXTRACT_MODE: ExtractMode = ExtractMode::Markdown;
const DEFAULT_MAX_CHARS: usize = 50_000;
const DEFAULT_CHAR_THRESHOLD: usize = 0;

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    extract_mode: ExtractMode,
    max_chars: usize,
    char_threshold: usize,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(extract_mode: ExtractMode, max_chars: usize, char_threshold: usize) -> Self {
        Self {
            extract_mode,
            max_chars,
            char_threshold,
        }
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let extract_mode = match env::var(ENV_EXTRACT_MODE) {
            Ok(raw) => raw.parse().map_err(|err| ConfigError::InvalidValue {
                field: ENV_EXTRACT_MODE,
                reason: format!("{err}"),
            })?,
            Err(_) => DEFAULT_EXTRACT_MODE,
        };
        let max_chars = parse_env(ENV_MAX_CHARS, DEFAULT_MAX_CHARS)?;
        let char_threshold = parse_env(ENV_CHAR_THRESHOLD, DEFAULT_CHAR_THRESHOLD)?;

        Ok(Self {
            extract_mode,
            max_chars,
            char_threshold,
        })
    }

    /// Output mode for extraction ("markdown" or "text").
    pub fn extract_mode(&self) -> ExtractMode {
        self.extract_mode
    }
    /// Character budget applied to the extracted text.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
    /// Minimum character count for a main-content region (0 = no threshold).
    pub fn char_threshold(&self) -> usize {
        self.char_threshold
    }

    /// Extractor knobs derived from this config.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            char_threshold: self.char_threshold,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACT_MODE, DEFAULT_MAX_CHARS, DEFAULT_CHAR_THRESHOLD)
    }
}

fn parse_env(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|err| ConfigError::InvalidValue {
                field: key,
                reason: format!("{err}"),
            }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
