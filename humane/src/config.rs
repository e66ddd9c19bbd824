use crate::format::{ColorChoice, Formattable, OutputFormat};
use libhumane::MonthFormat;
use libhumane::config::DateSettings;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
    /// Date formatting defaults
    #[serde(default)]
    pub date: DateSettings,
}

/// Style configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StyleConfig {
    /// Output format: pretty, json, yaml
    #[serde(default)]
    pub format: OutputFormat,
    /// Color output control: auto, always, never
    #[serde(default)]
    pub color: ColorChoice,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, toml_str).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

impl Formattable for Config {
    fn format_pretty(&self) -> String {
        let month_format = match self.date.month_format {
            MonthFormat::Full => "full",
            MonthFormat::Abbreviated => "abbreviated",
        };
        format!(
            "[style]\nformat = \"{}\"\ncolor = \"{}\"\n\n[date]\ngranularity = {}\nmax_friendly_seconds = {}\nunfriendly_format = \"{}\"\nmonth_format = \"{}\"",
            self.style.format,
            self.style.color,
            self.date.granularity,
            self.date.max_friendly_seconds,
            self.date.unfriendly_format,
            month_format,
        )
    }
}

/// Get the config file path, respecting HUMANE_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("HUMANE_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/humane/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("humane").join("config.toml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.toml")
    }
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(
            "Config file already exists. Use 'humane config set' to edit or 'rm' to recreate."
                .to_string(),
        );
    }

    Config::default().save(config_path)
}

/// Get a configuration value by key (supports nested keys like "date.granularity")
pub fn get_config_value(config_path: &Path, key: &str) -> Result<String, String> {
    let config = Config::load(config_path)?;

    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["style", "format"] => Ok(config.style.format.to_string()),
        ["style", "color"] => Ok(config.style.color.to_string()),
        ["date", "granularity"] => Ok(config.date.granularity.to_string()),
        ["date", "max_friendly_seconds"] => Ok(config.date.max_friendly_seconds.to_string()),
        ["date", "unfriendly_format"] => Ok(config.date.unfriendly_format.clone()),
        ["date", "month_format"] => Ok(match config.date.month_format {
            MonthFormat::Full => "full".to_string(),
            MonthFormat::Abbreviated => "abbreviated".to_string(),
        }),
        _ => Err(format!("Unknown config key: {}", key)),
    }
}

/// Set a configuration value by key (supports nested keys like "date.granularity")
pub fn set_config_value(config_path: &Path, key: &str, value: &str) -> Result<(), String> {
    // Load existing config or create default
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["style", "format"] => {
            config.style.format = OutputFormat::from(value);
        }
        ["style", "color"] => {
            config.style.color = ColorChoice::from(value);
        }
        ["date", "granularity"] => {
            config.date.granularity = value.parse::<i64>().map_err(|_| {
                format!("Invalid granularity value '{}': must be an integer", value)
            })?;
        }
        ["date", "max_friendly_seconds"] => {
            config.date.max_friendly_seconds = value.parse::<i64>().map_err(|_| {
                format!(
                    "Invalid max_friendly_seconds value '{}': must be an integer",
                    value
                )
            })?;
        }
        ["date", "unfriendly_format"] => {
            config.date.unfriendly_format = value.to_string();
        }
        ["date", "month_format"] => {
            config.date.month_format = MonthFormat::from(value);
        }
        _ => return Err(format!("Unknown config key: {}", key)),
    }

    config.save(config_path)
}

/// Display the entire configuration
pub fn display_config(config_path: &Path) -> Result<Config, String> {
    Config::load(config_path)
}
