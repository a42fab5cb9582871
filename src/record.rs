//! Log records and line formatting
//!
//! A [`LogRecord`] is created and consumed within a single log call; it has
//! no lifecycle beyond that. Formatting produces one bracketed, fixed-width
//! line per record:
//!
//! ```text
//! [22:02:51.865  ] [UNKNOWN        ] [New logger     ] ============================================
//! ```

use crate::level::Level;

/// One record, built at call entry with the current wall-clock time
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Local time as `HH:MM:SS.mmm`
    pub timestamp: String,
    pub level: Level,
    /// Short label identifying the calling function or site
    pub origin: String,
    pub message: String,
}

impl LogRecord {
    /// Create a record timestamped now
    pub fn new(level: Level, origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: current_time_string(),
            level,
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Render as `[time] [LEVEL] [origin] message\n`
    ///
    /// Time, level, and origin are each padded or truncated to `width`
    /// columns; the message is appended verbatim.
    pub fn format_line(&self, width: usize) -> String {
        format!(
            "[{}] [{}] [{}] {}\n",
            pad_or_truncate(&self.timestamp, width),
            pad_or_truncate(self.level.as_str(), width),
            pad_or_truncate(&self.origin, width),
            self.message
        )
    }
}

/// Current local time as `HH:MM:SS.mmm`, millis always zero-padded to 3 digits
pub fn current_time_string() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

/// Return exactly `width` characters: truncated if longer, right-padded with
/// spaces if shorter. Pure, no I/O.
pub fn pad_or_truncate(input: &str, width: usize) -> String {
    if input.chars().count() > width {
        input.chars().take(width).collect()
    } else {
        format!("{input:<width$}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pad_short_input() {
        assert_eq!(pad_or_truncate("abc", 15), "abc            ");
    }

    #[test]
    fn test_truncate_long_input() {
        assert_eq!(pad_or_truncate("a_very_long_origin_name", 15), "a_very_long_ori");
    }

    #[test]
    fn test_exact_width_unchanged() {
        let exact = "123456789012345";
        assert_eq!(pad_or_truncate(exact, 15), exact);
    }

    #[test]
    fn test_time_string_shape() {
        let time = current_time_string();
        // HH:MM:SS.mmm
        assert_eq!(time.len(), 12);
        assert_eq!(&time[2..3], ":");
        assert_eq!(&time[5..6], ":");
        assert_eq!(&time[8..9], ".");
        assert!(time[9..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_format_line_field_order() {
        let record = LogRecord::new(Level::Warning, "origin", "body text");
        let line = record.format_line(15);

        assert!(line.starts_with('['));
        assert!(line.ends_with("body text\n"));
        assert_eq!(&line[16..19], "] [");
        assert_eq!(&line[19..34], "WARNING        ");
        assert_eq!(&line[37..52], "origin         ");
    }

    #[test]
    fn test_format_line_custom_width() {
        let record = LogRecord::new(Level::Info, "o", "m");
        let line = record.format_line(4);
        // [tttt] [INFO] [o   ] m
        assert_eq!(&line[5..8], "] [");
        assert_eq!(&line[8..12], "INFO");
        assert_eq!(&line[15..19], "o   ");
    }

    proptest! {
        #[test]
        fn prop_output_is_exactly_width(input in ".{0,40}", width in 0usize..32) {
            let out = pad_or_truncate(&input, width);
            prop_assert_eq!(out.chars().count(), width);
        }

        #[test]
        fn prop_short_inputs_are_prefix(input in "[a-z]{0,10}") {
            let out = pad_or_truncate(&input, 15);
            prop_assert!(out.starts_with(&input));
            prop_assert!(out[input.len()..].chars().all(|c| c == ' '));
        }
    }
}
