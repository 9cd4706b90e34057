//! Error types and handling for chart-version-check
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes
//! and help text.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`bundle`]: Bundle descriptor errors
//! - [`index`]: Index file errors
//! - [`version`]: Version parsing and comparison errors
//!
//! Every variant maps to a process exit code through [`CheckError::exit_code`].

pub mod bundle;
pub mod fs;
pub mod index;
pub mod version;

use miette::Diagnostic;
use thiserror::Error;

/// Exit code for a bundle whose version does not advance past the index
pub const EXIT_VALIDATION_FAILED: i32 = 1;

/// Exit code for unreadable files and unparseable content
///
/// Taken from the "command invoked cannot execute" slot of the conventional
/// shell exit codes.
pub const EXIT_FORMAT_ERROR: i32 = 126;

/// Main error type for chart-version-check
#[derive(Error, Diagnostic, Debug)]
pub enum CheckError {
    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(
        code(chart_check::fs::read_failed),
        help("Check that the path exists and is readable")
    )]
    FileReadFailed { path: String, reason: String },

    // Bundle errors
    #[error("Failed to parse bundle file: {path}: {reason}")]
    #[diagnostic(
        code(chart_check::bundle::parse_failed),
        help("The bundle file must be YAML with 'name' and 'version' keys")
    )]
    BundleParseFailed { path: String, reason: String },

    #[error("Invalid bundle file: {path}: {message}")]
    #[diagnostic(code(chart_check::bundle::invalid))]
    BundleInvalid { path: String, message: String },

    // Index errors
    #[error("Failed to parse index file: {path}: {reason}")]
    #[diagnostic(
        code(chart_check::index::parse_failed),
        help("The index must map each bundle name to a list of entries with a 'version' key")
    )]
    IndexParseFailed { path: String, reason: String },

    #[error("No entries for '{name}' in index: {path}")]
    #[diagnostic(
        code(chart_check::index::no_entries),
        help("A bundle must be published at least once before its version can be compared")
    )]
    NoIndexEntries { name: String, path: String },

    // Version errors
    #[error("Invalid version '{version}' in {origin}: {reason}")]
    #[diagnostic(
        code(chart_check::version::invalid),
        help("Versions must follow semantic versioning, e.g. 1.2.3 or 1.2.3-rc.1")
    )]
    InvalidVersion {
        version: String,
        origin: String,
        reason: String,
    },

    #[error("The bundle version ({bundle}) is less than or equal to the latest on index ({latest})")]
    #[diagnostic(
        code(chart_check::version::not_newer),
        help("Bump the bundle version past the latest published version")
    )]
    VersionNotNewer { bundle: String, latest: String },
}

impl CheckError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::VersionNotNewer { .. } => EXIT_VALIDATION_FAILED,
            CheckError::FileReadFailed { .. }
            | CheckError::BundleParseFailed { .. }
            | CheckError::BundleInvalid { .. }
            | CheckError::IndexParseFailed { .. }
            | CheckError::NoIndexEntries { .. }
            | CheckError::InvalidVersion { .. } => EXIT_FORMAT_ERROR,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CheckError>;
