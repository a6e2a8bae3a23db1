//! Level taxonomy
//!
//! Six ordered severities. `Trace` and `Fatal` extend the conventional
//! four-level base (`Debug`, `Info`, `Warn`, `Error`) shared by both engines.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record, ordered from `Trace` to `Fatal`.
///
/// The `Default` value is `Info`; it is not the default minimum of either engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Position on the numeric severity scale used by the record engine.
    ///
    /// The base levels sit four apart so that offsets such as `INFO+2`
    /// can be expressed between them.
    pub fn severity(&self) -> i32 {
        match self {
            Level::Trace => -8,
            Level::Debug => -4,
            Level::Info => 0,
            Level::Warn => 4,
            Level::Error => 8,
            Level::Fatal => 12,
        }
    }

    /// Floor a raw severity to the nearest level at or below it.
    ///
    /// Values below `Trace` clamp to `Trace`, values above `Fatal` clamp to
    /// `Fatal`. Never fails.
    pub fn from_severity(severity: i32) -> Level {
        Level::ALL
            .iter()
            .rev()
            .copied()
            .find(|level| severity >= level.severity())
            .unwrap_or(Level::Trace)
    }

    /// Lowest level whose severity is at or above `severity`.
    ///
    /// Used to turn a raw minimum into a filter threshold: nothing below
    /// the minimum may pass. Values above `Fatal` clamp to `Fatal`.
    pub fn at_or_above(severity: i32) -> Level {
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.severity() >= severity)
            .unwrap_or(Level::Fatal)
    }

    /// Whether this is one of the four levels both engines know natively.
    pub fn is_base(&self) -> bool {
        matches!(self, Level::Debug | Level::Info | Level::Warn | Level::Error)
    }

    /// Parse a minimum level with an optional signed offset, e.g. `INFO+4`
    /// or `debug-4`. An offset between two levels rounds up, so `INFO+2`
    /// admits `Warn` and above but not `Info`.
    pub fn parse_with_offset(input: &str) -> Result<Level> {
        let trimmed = input.trim();
        let split = trimmed
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '+' || *c == '-')
            .map(|(idx, _)| idx);

        let (name, offset) = match split {
            Some(idx) => {
                let offset: i32 = trimmed[idx..]
                    .parse()
                    .map_err(|_| LoggerError::invalid_level(input))?;
                (&trimmed[..idx], offset)
            }
            None => (trimmed, 0),
        };

        let base: Level = name.parse()?;
        let severity = base
            .severity()
            .checked_add(offset)
            .ok_or_else(|| LoggerError::invalid_level(input))?;
        Ok(Level::at_or_above(severity))
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Trace => BrightBlack,
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Fatal => BrightRed,
        }
    }
}

/// Render any raw severity as a label.
///
/// Exact levels render as their name; anything else renders relative to
/// the nearest lower level, e.g. `INFO+2` or `TRACE-3`.
pub fn severity_label(severity: i32) -> String {
    let base = Level::from_severity(severity);
    let offset = i64::from(severity) - i64::from(base.severity());
    if offset == 0 {
        base.to_str().to_string()
    } else {
        format!("{}{:+}", base.to_str(), offset)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" | "PANIC" => Ok(Level::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
