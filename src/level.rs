//! Severity levels
//!
//! The stable vocabulary attached to each record. Levels are ordered low to
//! high by convention; the logger stores a current level but performs no
//! suppression based on it (the stored level only tags records emitted via
//! [`Logger::log_current`](crate::Logger::log_current)).

use std::fmt;
use std::str::FromStr;

/// Severity of a log record
///
/// `Unknown` is reserved for internal records such as the bootstrap marker,
/// and doubles as the catch-all when parsing unrecognized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
    Unknown,
}

impl Level {
    /// Uppercase name of the level. Total: every variant maps to a
    /// non-empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    /// Case-insensitive parse; anything unrecognized maps to `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Self::Debug,
            "INFO" => Self::Info,
            "WARNING" => Self::Warning,
            "ERROR" => Self::Error,
            "FATAL" => Self::Fatal,
            _ => Self::Unknown,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
