//! Bundle descriptor (Chart.yaml) data structures

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{self, Result};

/// Name and version of the bundle being released
///
/// Any other keys in the descriptor (`apiVersion`, `description`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleDescriptor {
    /// Bundle name, used as the lookup key in the index
    pub name: String,

    /// Declared version text, parsed later by the resolver
    pub version: String,
}

impl BundleDescriptor {
    /// Parse a bundle descriptor from YAML string
    ///
    /// `path` is only used for error context.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        let descriptor: Self = serde_yaml::from_str(yaml)
            .map_err(|e| error::bundle::parse_failed(path, e.to_string()))?;
        descriptor.validate(path)?;
        Ok(descriptor)
    }

    /// Validate bundle descriptor
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(error::bundle::invalid(path, "'name' must not be empty"));
        }
        Ok(())
    }
}

/// Load the bundle descriptor at `path`
pub fn read_bundle(path: &Path) -> Result<BundleDescriptor> {
    let content = super::read_file(path)?;
    let descriptor = BundleDescriptor::from_yaml(&content, path)?;
    debug!(
        name = %descriptor.name,
        version = %descriptor.version,
        "read bundle descriptor from {}",
        path.display()
    );
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::CheckError;

    fn path() -> &'static Path {
        Path::new("Chart.yaml")
    }

    #[test]
    fn test_bundle_from_yaml() {
        let yaml = r#"
apiVersion: v2
name: app
description: A Helm chart
version: 2.0.0
appVersion: "1.16.0"
"#;
        let bundle = BundleDescriptor::from_yaml(yaml, path()).unwrap();
        assert_eq!(bundle.name, "app");
        assert_eq!(bundle.version, "2.0.0");
    }

    #[test]
    fn test_bundle_version_is_not_validated() {
        let bundle =
            BundleDescriptor::from_yaml("name: app\nversion: not-a-version\n", path()).unwrap();
        assert_eq!(bundle.version, "not-a-version");
    }

    #[test]
    fn test_bundle_missing_version() {
        let err = BundleDescriptor::from_yaml("name: app\n", path()).unwrap_err();
        assert!(matches!(err, CheckError::BundleParseFailed { .. }));
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_bundle_missing_name() {
        let err = BundleDescriptor::from_yaml("version: 1.0.0\n", path()).unwrap_err();
        assert!(matches!(err, CheckError::BundleParseFailed { .. }));
    }

    #[test]
    fn test_bundle_invalid_yaml() {
        let err = BundleDescriptor::from_yaml("name: [app\nversion: 1.0.0\n", path()).unwrap_err();
        assert!(matches!(err, CheckError::BundleParseFailed { .. }));
    }

    #[test]
    fn test_bundle_empty_document() {
        let err = BundleDescriptor::from_yaml("", path()).unwrap_err();
        assert!(matches!(err, CheckError::BundleParseFailed { .. }));
    }

    #[test]
    fn test_bundle_empty_name() {
        let err = BundleDescriptor::from_yaml("name: '  '\nversion: 1.0.0\n", path()).unwrap_err();
        assert!(matches!(err, CheckError::BundleInvalid { .. }));
    }

    #[test]
    fn test_read_bundle_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = read_bundle(&temp.path().join("Chart.yaml")).unwrap_err();
        assert!(matches!(err, CheckError::FileReadFailed { .. }));
    }

    #[test]
    fn test_read_bundle_from_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("Chart.yaml");
        std::fs::write(&file, "name: app\nversion: 1.2.3\n").unwrap();

        let bundle = read_bundle(&file).unwrap();
        assert_eq!(bundle.name, "app");
        assert_eq!(bundle.version, "1.2.3");
    }
}
