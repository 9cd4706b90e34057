//! Input file handling for chart-version-check
//!
//! This module contains data structures for:
//! - the bundle descriptor (`Chart.yaml`) - name and version of the bundle being released
//! - the version index (`index.yaml`) - previously published versions per bundle name

pub mod bundle;
pub mod index;

use std::path::Path;

use crate::error::{self, Result};

// Re-export the readers used by the check pipeline
pub use bundle::read_bundle;
pub use index::{Index, read_index};

/// Read a whole input file into memory
///
/// The file handle is released before this returns, on success and on error.
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))
}
