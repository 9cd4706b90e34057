//! Version errors

use super::CheckError;

/// Creates an invalid version error
///
/// `origin` describes where the text came from, e.g. `bundle file chart.yaml`.
pub fn invalid(
    version: impl Into<String>,
    origin: impl Into<String>,
    reason: impl Into<String>,
) -> CheckError {
    CheckError::InvalidVersion {
        version: version.into(),
        origin: origin.into(),
        reason: reason.into(),
    }
}

/// Creates a version not newer error
pub fn not_newer(bundle: &semver::Version, latest: &semver::Version) -> CheckError {
    CheckError::VersionNotNewer {
        bundle: bundle.to_string(),
        latest: latest.to_string(),
    }
}
