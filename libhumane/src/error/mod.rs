//! Error types for Humane
//!
//! Formatting itself is total over well-formed input; errors only arise at
//! the boundaries, when a date value cannot be resolved to a timestamp or a
//! configuration source cannot be read.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for Humane operations
#[derive(Error, Debug)]
pub enum HumaneError {
    /// A date string or timestamp that cannot be resolved to a point in time
    #[error("Invalid instant '{input}': {reason}")]
    InvalidInstant { input: String, reason: String },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for Humane operations
pub type Result<T> = std::result::Result<T, HumaneError>;

impl HumaneError {
    /// Creates a new invalid instant error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    ///
    /// let err = HumaneError::invalid_instant("next blursday", "no known date layout matched");
    /// assert!(matches!(err, HumaneError::InvalidInstant { .. }));
    /// ```
    pub fn invalid_instant<S: Into<String>, R: Into<String>>(input: S, reason: R) -> Self {
        Self::InvalidInstant {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    ///
    /// let err = HumaneError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, HumaneError::Config { .. }));
    /// ```
    pub fn config<M: Into<String>, P: Into<String>>(message: M, path: Option<P>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::error::HumaneError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = HumaneError::config_with_source("failed to read config", Some("/path/to/config.yaml"), io_err);
    /// assert!(matches!(err, HumaneError::Config { .. }));
    /// ```
    pub fn config_with_source<M, P, E>(message: M, path: Option<P>, source: E) -> Self
    where
        M: Into<String>,
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}

impl From<config::ConfigError> for HumaneError {
    fn from(err: config::ConfigError) -> Self {
        HumaneError::config_with_source("Failed to build configuration", None::<String>, err)
    }
}
