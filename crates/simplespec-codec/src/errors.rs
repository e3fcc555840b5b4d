//! Error handling for simplespec-codec
//!
//! Wraps the simplespec-core error facility with codec-specific constructors

use simplespec_core::errors::{ExError, SpecLangError};
use simplespec_core::Key;
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a parse error for an enum line with the wrong assignment token
pub fn unexpected_assignment(key: &Key, line: usize, expected: &str, found: &str) -> ExError {
    SpecLangError::UnexpectedAssignment {
        key: key.name().to_string(),
        line,
        expected: expected.to_string(),
        found: found.to_string(),
    }
    .into()
}

/// Create an error for a backing file that cannot be opened
pub fn open_failed(key: &Key, path: &Path, err: std::io::Error) -> ExError {
    SpecLangError::OpenFailed {
        key: key.name().to_string(),
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Create an error for a failed read on an open stream
pub fn read_failed(key: &Key, line: usize, err: std::io::Error) -> ExError {
    SpecLangError::ReadFailed {
        key: key.name().to_string(),
        line,
        reason: err.to_string(),
    }
    .into()
}

/// Create the warning for a `mountpoint` line that names no path
pub fn mountpoint_without_path(key: &Key, line: usize) -> ExError {
    SpecLangError::MountpointWithoutPath {
        key: key.name().to_string(),
        line,
    }
    .into()
}

/// Create an error for a parent key without a file path
pub fn missing_path(key: &Key) -> ExError {
    SpecLangError::MissingPath {
        key: key.name().to_string(),
    }
    .into()
}
