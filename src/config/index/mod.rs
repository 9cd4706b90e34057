//! Version index (index.yaml) data structures
//!
//! The index maps each bundle name to the list of versions already published
//! under that name. Two layouts are accepted:
//!
//! ```yaml
//! # Helm repository layout
//! apiVersion: v1
//! entries:
//!   app:
//!     - version: 1.5.0
//!
//! # Flat layout
//! app:
//!   - version: 1.5.0
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Value;
use tracing::{debug, warn};

use crate::error::{self, Result};

/// Top-level key holding the per-name table in the Helm layout
const HELM_ENTRIES_KEY: &str = "entries";

/// One published release of a bundle
///
/// Helm entries carry many more keys (`urls`, `digest`, `created`, ...), all ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexEntry {
    /// Published version text
    pub version: String,
}

/// Previously published versions, keyed by bundle name
#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Entries per bundle name, in file order
    entries: HashMap<String, Vec<IndexEntry>>,

    /// File the index was read from
    path: PathBuf,
}

/// Helm repository layout: the per-name table sits under `entries`
#[derive(Debug, Deserialize)]
struct HelmIndex {
    entries: HashMap<String, Vec<IndexEntry>>,
}

impl Index {
    /// Parse an index from YAML string
    ///
    /// The document is only inspected as a `Value` to pick the layout. Entries
    /// are decoded from the text itself so unquoted versions such as `1.10`
    /// keep their spelling instead of being read as numbers.
    ///
    /// `path` is kept for error context.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        let parse_failed = |e: serde_yaml::Error| error::index::parse_failed(path, e.to_string());

        let document: Value = serde_yaml::from_str(yaml).map_err(parse_failed)?;

        let entries = match document {
            Value::Null => HashMap::new(),
            Value::Mapping(mapping) => {
                if matches!(mapping.get(HELM_ENTRIES_KEY), Some(Value::Mapping(_))) {
                    serde_yaml::from_str::<HelmIndex>(yaml)
                        .map_err(parse_failed)?
                        .entries
                } else {
                    serde_yaml::from_str::<HashMap<String, Vec<IndexEntry>>>(yaml)
                        .map_err(parse_failed)?
                }
            }
            _ => {
                return Err(error::index::parse_failed(
                    path,
                    "expected a mapping of bundle names at the top level",
                ));
            }
        };

        Ok(Self {
            entries,
            path: path.to_path_buf(),
        })
    }

    /// Entries published under `name`, in file order
    ///
    /// An unknown name yields an empty slice.
    pub fn entries_for(&self, name: &str) -> &[IndexEntry] {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of bundle names in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index lists no bundle names at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File the index was read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Load the index at `path`
pub fn read_index(path: &Path) -> Result<Index> {
    let content = super::read_file(path)?;
    let index = Index::from_yaml(&content, path)?;
    if index.is_empty() {
        warn!("index {} lists no bundles", path.display());
    } else {
        debug!(names = index.len(), "read index from {}", path.display());
    }
    Ok(index)
}
