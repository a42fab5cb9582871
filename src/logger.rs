//! The logger: timestamped, level-tagged line emission
//!
//! One `Logger` owns the console flag, the stored level, and the optional
//! file sink. All mutable state sits behind a single `parking_lot::Mutex`,
//! so concurrent `log` calls emit whole lines instead of interleaving bytes,
//! and `change_sink` cannot race an in-flight write.
//!
//! Construction never fails the caller: if the requested file cannot be
//! opened, the logger degrades to console-only and reports the failure on
//! the diagnostic channel.

use crate::constants::{BOOTSTRAP_DIVIDER, BOOTSTRAP_ORIGIN, DEFAULT_FIELD_WIDTH};
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::{normalize_path, FileSink};
use parking_lot::Mutex;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Mutable logger state, guarded as one unit
#[derive(Debug)]
struct Inner {
    level: Level,
    console: bool,
    sink: Option<FileSink>,
}

/// Synchronous line logger with console and append-only file sinks
///
/// Exclusive owner of its file handle; all methods take `&self` and
/// serialize through the internal lock. The stored level tags records
/// emitted via [`Logger::log_current`] — it does not suppress anything.
#[derive(Debug)]
pub struct Logger {
    field_width: usize,
    inner: Mutex<Inner>,
}

impl Logger {
    /// Open a logger writing to `path` (empty string for console-only)
    /// and/or standard output.
    ///
    /// A path without an extension gets `.log` appended. If the file cannot
    /// be opened, a diagnostic is emitted, console output is forced on, and
    /// the sink is left absent. One bootstrap record at [`Level::Unknown`]
    /// marks the start of the session.
    pub fn open(path: &str, console: bool) -> Self {
        Self::with_field_width(path, console, DEFAULT_FIELD_WIDTH)
    }

    /// Same as [`Logger::open`] with a custom column width for the time,
    /// level, and origin fields.
    pub fn with_field_width(path: &str, console: bool, field_width: usize) -> Self {
        let mut console = console;
        let sink = if path.is_empty() {
            None
        } else {
            match FileSink::open(normalize_path(path)) {
                Ok(sink) => Some(sink),
                Err(e) => {
                    warn!("{}", e);
                    console = true;
                    None
                }
            }
        };

        let logger = Self {
            field_width,
            inner: Mutex::new(Inner {
                level: Level::default(),
                console,
                sink,
            }),
        };
        logger.log(Level::Unknown, BOOTSTRAP_ORIGIN, BOOTSTRAP_DIVIDER);
        logger
    }

    /// Replace the stored level. Pure mutation, no I/O; any value accepted.
    pub fn set_level(&self, level: Level) {
        self.inner.lock().level = level;
    }

    /// The currently stored level
    pub fn level(&self) -> Level {
        self.inner.lock().level
    }

    /// Whether records are echoed to standard output
    pub fn console_enabled(&self) -> bool {
        self.inner.lock().console
    }

    /// Normalized path of the open file sink, if any
    pub fn file_path(&self) -> Option<PathBuf> {
        self.inner
            .lock()
            .sink
            .as_ref()
            .map(|s| s.path().to_path_buf())
    }

    /// Emit one record at `level`.
    ///
    /// Every call emits regardless of the stored level; the logger performs
    /// no level-based suppression.
    pub fn log(&self, level: Level, origin: &str, message: &str) {
        let record = LogRecord::new(level, origin, message);
        let mut inner = self.inner.lock();
        self.emit(&mut inner, &record);
    }

    /// Emit one record at the currently stored level — whatever `set_level`
    /// last set, not a fixed default.
    pub fn log_current(&self, origin: &str, message: &str) {
        let mut inner = self.inner.lock();
        let record = LogRecord::new(inner.level, origin, message);
        self.emit(&mut inner, &record);
    }

    /// Switch to a new sink path, closing the current file first.
    ///
    /// Same extension defaulting and degrade-to-console behavior as
    /// construction. No bootstrap record is emitted on a switch.
    pub fn change_sink(&self, new_path: &str) {
        let mut inner = self.inner.lock();
        inner.sink = None;

        if new_path.is_empty() {
            return;
        }
        match FileSink::open(normalize_path(new_path)) {
            Ok(sink) => inner.sink = Some(sink),
            Err(e) => {
                warn!("{}", e);
                inner.console = true;
            }
        }
    }

    /// Format and write one record to the active sinks. Best-effort: write
    /// failures are swallowed after a diagnostic breadcrumb.
    fn emit(&self, inner: &mut Inner, record: &LogRecord) {
        let line = record.format_line(self.field_width);

        if inner.console {
            // One write_all per line keeps concurrent output whole.
            let _ = std::io::stdout().write_all(line.as_bytes());
        }
        if let Some(sink) = inner.sink.as_mut() {
            if let Err(e) = sink.write_line(&line) {
                debug!("{}", e);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
