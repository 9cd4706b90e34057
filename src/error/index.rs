//! Index file errors

use std::path::Path;

use super::CheckError;

/// Creates an index parse failed error
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> CheckError {
    CheckError::IndexParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a no entries error
pub fn no_entries(name: impl Into<String>, path: &Path) -> CheckError {
    CheckError::NoIndexEntries {
        name: name.into(),
        path: path.display().to_string(),
    }
}
