//! Configuration Reader
//!
//! Resolves the named settings both adapters read once at construction.
//! Missing or unparsable values fall back to documented defaults; nothing
//! here is ever surfaced to a logging call site.
//!
//! | Variable      | Type   | Default |
//! |---------------|--------|---------|
//! | `APP_VERSION` | string | `""`    |
//! | `HOST`        | string | `""`    |
//! | `LOG_JSON`    | bool   | `false` |
//! | `LOG_CALLERS` | bool   | `false` |
//! | `LOG_LEVEL`   | string | engine specific |

use super::error::{LoggerError, Result};

pub const APP_VERSION_ENV: &str = "APP_VERSION";
pub const HOST_ENV: &str = "HOST";
pub const LOG_JSON_ENV: &str = "LOG_JSON";
pub const LOG_CALLERS_ENV: &str = "LOG_CALLERS";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Encode records as JSON instead of text
    pub json: bool,
    /// Report the call site on every record
    pub callers: bool,
    /// Raw `LOG_LEVEL`; each engine parses it with its own rules
    pub level: Option<String>,
    pub host: String,
    pub version: String,
}

impl Config {
    /// Read all settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read all settings through `lookup`, which returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            json: parse_bool(lookup(LOG_JSON_ENV).as_deref()).unwrap_or(false),
            callers: parse_bool(lookup(LOG_CALLERS_ENV).as_deref()).unwrap_or(false),
            level: lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()),
            host: lookup(HOST_ENV).unwrap_or_default(),
            version: lookup(APP_VERSION_ENV).unwrap_or_default(),
        }
    }

    /// Fetch a variable that must be present and non-empty.
    pub fn must_get(key: &str) -> Result<String> {
        match std::env::var(key) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Err(LoggerError::missing_env(key)),
        }
    }
}

/// Read a boolean variable, returning `default` when unset or unparsable.
pub fn get_bool(key: &str, default: bool) -> bool {
    parse_bool(std::env::var(key).ok().as_deref()).unwrap_or(default)
}

/// Parse the conventional boolean spellings; anything else is `None`.
pub fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value? {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
