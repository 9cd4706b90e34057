//! File system errors

use std::path::Path;

use super::CheckError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: &std::io::Error) -> CheckError {
    CheckError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
