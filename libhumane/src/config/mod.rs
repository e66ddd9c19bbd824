//! Library configuration.
//!
//! Holds the defaults the high-level [`crate::Humane`] API applies when a
//! caller does not pass an explicit value. Configuration is loaded from a
//! YAML file and merged over the built-in defaults.

use crate::date::{DEFAULT_MAX_FRIENDLY_SECONDS, MonthFormat};
use crate::datefmt::DEFAULT_UNFRIENDLY_FORMAT;
use crate::error::{HumaneError, Result};
use crate::interval::DEFAULT_GRANULARITY;
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;


/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub date: DateSettings,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            // Add default values
            .add_source(ConfigRs::try_from(&Config::default())?)
            // Merge with YAML string
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// Without a path the built-in defaults are returned. A path that does
    /// not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder()
            // Add default values
            .add_source(ConfigRs::try_from(&Config::default())?);

        if let Some(p) = path {
            if !p.exists() {
                return Err(HumaneError::config(
                    "Configuration file not found",
                    Some(p.display().to_string()),
                ));
            }
            debug!(path = %p.display(), "loading configuration file");
            builder = builder.add_source(File::from(p).required(true));
        }

        Self::from_builder(builder, path)
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                HumaneError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path.map(|p| p.display().to_string()),
                    e,
                )
            })
    }
}

/// Defaults for the date formatters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateSettings {
    /// Number of unit phrases in an interval.
    #[serde(default = "default_granularity")]
    pub granularity: i64,

    /// Age in seconds after which a date is shown absolutely.
    #[serde(default = "default_max_friendly_seconds")]
    pub max_friendly_seconds: i64,

    /// Token layout for absolute dates.
    #[serde(default = "default_unfriendly_format")]
    pub unfriendly_format: String,

    /// Month name style in ranges.
    #[serde(default)]
    pub month_format: MonthFormat,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            granularity: default_granularity(),
            max_friendly_seconds: default_max_friendly_seconds(),
            unfriendly_format: default_unfriendly_format(),
            month_format: MonthFormat::default(),
        }
    }
}

fn default_granularity() -> i64 {
    DEFAULT_GRANULARITY
}

fn default_max_friendly_seconds() -> i64 {
    DEFAULT_MAX_FRIENDLY_SECONDS // 1 week
}

fn default_unfriendly_format() -> String {
    DEFAULT_UNFRIENDLY_FORMAT.to_string()
}
