//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config::{self, Config};
use crate::format::ColorChoice;
use libhumane::{Humane, MonthFormat};
use std::env;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// Verbosity levels selected with repeated `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    Normal,
    /// `-v`: informational messages
    Verbose,
    /// `-vv`: debug messages
    VeryVerbose,
    /// `-vvv`: everything
    Trace,
}

impl VerbosityLevel {
    /// Map a `-v` count to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Default log filter directive for this level
    pub fn log_filter(self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::VeryVerbose => "debug",
            VerbosityLevel::Trace => "trace",
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Verbosity requested on the command line
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli_color: ColorChoice, verbosity: VerbosityLevel) -> Self {
        // 1. Start with defaults
        let mut config = Config::default();

        // 2. Load and merge config file if it exists
        let config_path = config::get_config_path();
        if config_path.exists() {
            match Config::load(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => warn!(path = %config_path.display(), "ignoring config file: {}", e),
            }
        }

        // 3. Apply environment variable overrides
        apply_env_overrides(&mut config);

        // 4. Apply CLI flag overrides (highest priority)
        // Only override if not Auto (which is the default from clap)
        // This way we respect config file when user doesn't explicitly set --color
        if cli_color != ColorChoice::Auto {
            config.style.color = cli_color;
        }

        debug!(?config, "resolved configuration");
        Self { config, verbosity }
    }

    /// A formatter carrying the resolved date defaults
    pub fn humane(&self) -> Humane {
        Humane::with_config(libhumane::Config {
            date: self.config.date.clone(),
        })
    }
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(color) = env::var("HUMANE_COLOR") {
        config.style.color = ColorChoice::from(color.as_str());
    }
    if let Ok(granularity) = env::var("HUMANE_GRANULARITY") {
        match granularity.parse::<i64>() {
            Ok(value) => config.date.granularity = value,
            Err(_) => warn!(value = %granularity, "HUMANE_GRANULARITY is not an integer"),
        }
    }
    if let Ok(month_format) = env::var("HUMANE_MONTH_FORMAT") {
        config.date.month_format = MonthFormat::from(month_format.as_str());
    }
}
