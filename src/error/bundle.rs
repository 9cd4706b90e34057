//! Bundle descriptor errors

use std::path::Path;

use super::CheckError;

/// Creates a bundle parse failed error
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> CheckError {
    CheckError::BundleParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an invalid bundle error
pub fn invalid(path: &Path, message: impl Into<String>) -> CheckError {
    CheckError::BundleInvalid {
        path: path.display().to_string(),
        message: message.into(),
    }
}
