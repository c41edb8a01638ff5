//! Typed error variants for the touchdeck-config crate.
//!
//! Exposed so library consumers can match on specific failure modes
//! instead of opaque `anyhow` strings. `ConfigError` values coerce into
//! `anyhow::Error` automatically at the binary seam via the blanket
//! `From` impl anyhow provides for any `std::error::Error`.

use std::fmt;

/// Errors produced while loading, saving, or mutating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    Io(std::io::Error),

    /// The config file contained invalid JSON that could not be parsed.
    Parse(serde_json::Error),

    /// A value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    Validation(String),

    /// A mode or button index was outside the current collection bounds.
    ///
    /// The inner string names the offending index and the valid range.
    IndexOutOfRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error reading config: {e}"),
            ConfigError::Parse(e) => write!(f, "JSON parse error in config: {e}"),
            ConfigError::Validation(msg) => write!(f, "Config validation error: {msg}"),
            ConfigError::IndexOutOfRange(msg) => write!(f, "Index out of range: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) | ConfigError::IndexOutOfRange(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
