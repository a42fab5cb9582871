//! Sink error types
//!
//! Sink failures never propagate out of [`Logger`](crate::Logger): file-open
//! failures degrade to console-only emission and write failures are swallowed
//! as best-effort. The types here exist so the sink layer can report what
//! went wrong to the diagnostic channel.
//! Use `Result<T>` as shorthand for `std::result::Result<T, SinkError>`.

use std::fmt;
use std::path::PathBuf;

/// Errors from the append-mode file sink
#[derive(Debug)]
pub enum SinkError {
    /// Failed to open the log file in append mode
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to append a formatted line
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, .. } => write!(f, "Can't open log file {}", path.display()),
            Self::Write { path, .. } => write!(f, "Can't write to log file {}", path.display()),
        }
    }
}

/// Alias for Result with SinkError
pub type Result<T> = std::result::Result<T, SinkError>;
