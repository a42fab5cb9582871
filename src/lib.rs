//! linelog — minimal process-wide line logger
//!
//! Timestamps and tags messages with a severity level and an origin label,
//! then emits them to standard output and/or an append-only file. One
//! synchronous, line-oriented logger per process:
//! - [`Level`] - severity vocabulary (DEBUG..FATAL plus UNKNOWN)
//! - [`LogRecord`] - one timestamped record, formatted and gone
//! - [`Logger`] - console/file emission behind a per-logger lock
//! - [`get_instance`] - lazy process-wide accessor
//!
//! ```no_run
//! use linelog::{get_instance, Level};
//!
//! let log = get_instance("app", true);
//! log.log(Level::Info, "startup", "ready");
//! ```

pub mod cli;
pub mod constants;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

pub use error::SinkError;
pub use global::get_instance;
pub use level::Level;
pub use logger::Logger;
pub use record::{current_time_string, pad_or_truncate, LogRecord};

/// Initialize internal tracing for diagnostic output (file-open failures,
/// swallowed write errors)
///
/// Call early in main() before any logging occurs.
/// Set `verbose` to true for debug-level output.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(tracing_subscriber::EnvFilter::new(level))
        .try_init();
}
