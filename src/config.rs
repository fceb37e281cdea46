//! Project configuration
//!
//! Settings live in `.nbscan.toml` in the directory nbscan runs from, or in
//! a file named with `--config`. A missing default file means defaults.
//!
//! ```toml
//! [scan]
//! exclude = ["target/**", "*.min.js"]
//! include_hidden = false
//! fail_on_findings = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Deserialize;
use thiserror::Error;

use crate::paths::{self, CollectOptions};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        /// The config path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// The config path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// An exclude entry is not a valid glob
    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidGlob {
        /// The offending pattern
        pattern: String,
        /// Underlying glob error
        source: glob::PatternError,
    },
}

/// nbscan configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Settings for target collection and scanning
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns, relative to each walked directory, to skip
    pub exclude: Vec<String>,

    /// Walk into hidden directories and pick up hidden files
    pub include_hidden: bool,

    /// Exit non-zero when any line is flagged
    pub fail_on_findings: bool,
}

impl Config {
    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one,
    /// `.nbscan.toml` in `dir` is used when present.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let path = paths::config_file(dir);
        if path.is_file() {
            Self::load_file(&path)
        } else {
            log::debug!("No {} in {}, using defaults", paths::CONFIG_FILE, dir.display());
            Ok(Self::default())
        }
    }

    /// Load and parse a specific config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Compile the exclude globs
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>, ConfigError> {
        self.scan
            .exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| ConfigError::InvalidGlob {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Build the directory walking options for this config
    pub fn collect_options(&self) -> Result<CollectOptions, ConfigError> {
        Ok(CollectOptions {
            exclude: self.exclude_patterns()?,
            include_hidden: self.scan.include_hidden,
        })
    }
}
