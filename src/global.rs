//! Process-wide accessor
//!
//! Lazily constructs the single shared [`Logger`] on first access and hands
//! out the same `&'static` reference thereafter. `OnceLock` provides the
//! one-time-initialization guarantee; later calls' arguments are silently
//! ignored.

use crate::logger::Logger;
use std::sync::OnceLock;

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// Get the process-wide logger, constructing it on the first call.
///
/// Only the call that performs construction consults `path` and `console`;
/// every later call returns the existing instance unchanged. The instance
/// lives for the rest of the process and is never destroyed by callers.
pub fn get_instance(path: &str, console: bool) -> &'static Logger {
    INSTANCE.get_or_init(|| Logger::open(path, console))
}
