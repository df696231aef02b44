//! Single Responsibility Principle
//! Each example keeps data, validation, storage and notification in
//! separate types so each has exactly one reason to change.
//!
//! Run with: cargo run --bin srp

pub mod article;
pub mod invoice;
pub mod order;
pub mod registration;
pub mod report;
pub mod todo;
pub mod user_printer;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Titles longer than this are rejected by the report and todo validators.
pub const MAX_TITLE_LEN: usize = 200;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} is {len} characters long, limit is {max}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} is not a valid email address")]
    InvalidEmail { field: &'static str },

    #[error("{field} must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },
}

pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn require_max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, max, len });
    }
    Ok(())
}

/// Writes `contents` to `path`, creating parent directories, and returns
/// the absolute path of the written file.
pub fn write_scratch(path: &Path, contents: &str) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    let absolute = fs::canonicalize(path)?;
    tracing::debug!(path = %absolute.display(), bytes = contents.len(), "scratch file written");
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("title", "ok").is_ok());
        assert_eq!(
            require_text("title", "   \t"),
            Err(ValidationError::Blank { field: "title" })
        );
    }

    #[test]
    fn test_require_max_len_counts_chars() {
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(require_max_len("title", &title, MAX_TITLE_LEN).is_ok());

        let err = require_max_len("title", &format!("{}x", title), MAX_TITLE_LEN).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
                len: MAX_TITLE_LEN + 1
            }
        );
        assert_eq!(err.to_string(), "title is 201 characters long, limit is 200");
    }

    #[test]
    fn test_write_scratch_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        let written = write_scratch(&path, "data").unwrap();
        assert!(written.is_absolute());
        assert_eq!(fs::read_to_string(written).unwrap(), "data");
    }
}
