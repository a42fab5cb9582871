//! Append-mode file sink
//!
//! The sink is deliberately simple: open in append mode, write a line, flush.
//! No rotation, no buffering thread. Closing happens when the handle drops.

use crate::constants::DEFAULT_LOG_EXTENSION;
use crate::error::{Result, SinkError};
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Normalize a caller-supplied sink path: a file name without an extension
/// gets `.log` appended. Existing extensions are left alone.
pub fn normalize_path(path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.extension().is_none() {
        path.with_extension(DEFAULT_LOG_EXTENSION)
    } else {
        path.to_path_buf()
    }
}

/// An open append-mode log file
///
/// Owns the handle exclusively; the file is closed when the sink drops.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Open `path` in append mode, creating the file if missing.
    /// Never truncates existing content.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| SinkError::Open {
                path: path.clone(),
                source: e,
            })?;
        Ok(Self { path, file })
    }

    /// The normalized path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one formatted line and flush.
    ///
    /// Seeks to end-of-file before every write so lines land after anything
    /// an external appender wrote since the last call.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        append(&mut self.file, line).map_err(|e| SinkError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

fn append(file: &mut File, line: &str) -> io::Result<()> {
    file.seek(SeekFrom::End(0))?;
    file.write_all(line.as_bytes())?;
    file.flush()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn unique_temp_dir() -> PathBuf {
        let base = std::env::temp_dir();
        let pid = std::process::id();
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        base.join(format!("linelog-sink-{}-{}", pid, ts))
    }

    #[test]
    fn test_normalize_adds_log_extension() {
        assert_eq!(normalize_path("report"), PathBuf::from("report.log"));
    }

    #[test]
    fn test_normalize_keeps_existing_extension() {
        assert_eq!(normalize_path("report.txt"), PathBuf::from("report.txt"));
        assert_eq!(normalize_path("report.log"), PathBuf::from("report.log"));
    }

    #[test]
    fn test_normalize_only_looks_at_file_name() {
        assert_eq!(
            normalize_path("logs.d/report"),
            PathBuf::from("logs.d/report.log")
        );
    }

    #[test]
    fn test_open_creates_and_appends() {
        let dir = unique_temp_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.log");

        let mut sink = FileSink::open(path.clone()).unwrap();
        sink.write_line("first\n").unwrap();
        sink.write_line("second\n").unwrap();
        drop(sink);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reopen_preserves_content() {
        let dir = unique_temp_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.log");
        fs::write(&path, "existing\n").unwrap();

        let mut sink = FileSink::open(path.clone()).unwrap();
        sink.write_line("appended\n").unwrap();
        drop(sink);

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nappended\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = unique_temp_dir();
        let path = dir.join("nope").join("out.log");

        let err = FileSink::open(path.clone()).unwrap_err();
        assert!(err.to_string().starts_with("Can't open log file"));
    }
}
