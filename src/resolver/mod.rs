//! Version resolution for chart-version-check
//!
//! This module handles:
//! - Parsing version text into `semver::Version` values
//! - Ordering versions by semantic-versioning precedence
//! - Finding the latest published version of a bundle in the index

mod loose;

use std::cmp::Ordering;

use semver::{Prerelease, Version};
use tracing::debug;

use crate::config::Index;
use crate::error::{self, Result};

/// How strictly version text is parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Exact `major.minor.patch[-pre][+build]` syntax
    #[default]
    Strict,

    /// Also accept a leading `v` and missing minor/patch components
    Loose,
}

/// Parse version text
///
/// `origin` names where the text came from and only appears in the error.
pub fn parse_version(text: &str, origin: &str, mode: ParseMode) -> Result<Version> {
    let candidate = match mode {
        ParseMode::Strict => text.to_string(),
        ParseMode::Loose => loose::normalize(text),
    };

    Version::parse(&candidate).map_err(|e| error::version::invalid(text, origin, e.to_string()))
}

/// Compare two versions by semantic-versioning precedence
///
/// Unlike `Version`'s `Ord`, build metadata is ignored, so `1.0.0+a` and
/// `1.0.0+b` compare equal.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    precedence(a).cmp(&precedence(b))
}

fn precedence(version: &Version) -> (u64, u64, u64, &Prerelease) {
    (version.major, version.minor, version.patch, &version.pre)
}

/// Latest version published under `name` in `index`
///
/// Every entry for `name` must parse; the first one that does not aborts the
/// resolution. Entries of equal precedence are interchangeable, so which one
/// of them is returned is unspecified.
pub fn resolve_latest(name: &str, index: &Index, mode: ParseMode) -> Result<Version> {
    let entries = index.entries_for(name);

    let versions = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let origin = format!(
                "index entry #{} for '{name}' in {}",
                position + 1,
                index.path().display()
            );
            parse_version(&entry.version, &origin, mode)
        })
        .collect::<Result<Vec<_>>>()?;

    let latest = versions
        .into_iter()
        .max_by(cmp_precedence)
        .ok_or_else(|| error::index::no_entries(name, index.path()))?;

    debug!(
        name,
        candidates = entries.len(),
        latest = %latest,
        "resolved latest version on index"
    );
    Ok(latest)
}
