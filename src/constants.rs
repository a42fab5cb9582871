//! Crate-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

/// Width of the time, level, and origin columns in a formatted line
pub const DEFAULT_FIELD_WIDTH: usize = 15;

/// Extension appended to sink paths that carry none
pub const DEFAULT_LOG_EXTENSION: &str = "log";

/// Origin label of the bootstrap record emitted once per logger construction
pub const BOOTSTRAP_ORIGIN: &str = "New logger";

/// Message body of the bootstrap record
pub const BOOTSTRAP_DIVIDER: &str = "============================================";
