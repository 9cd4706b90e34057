//! Lenient version normalization
//!
//! Rewrites common non-canonical spellings (`v1.2`, `3`) into strict
//! `major.minor.patch` form before parsing.

/// Normalize version text for loose parsing
///
/// Strips surrounding whitespace and one leading `v`/`V`, then pads the
/// numeric core with `.0` up to three components. Pre-release and build
/// suffixes are kept as written. Text that is not a version stays invalid.
pub(super) fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    let unprefixed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

    let core_end = unprefixed.find(['-', '+']).unwrap_or(unprefixed.len());
    let (core, suffix) = unprefixed.split_at(core_end);

    let mut normalized = core.to_string();
    for _ in core.split('.').count()..3 {
        normalized.push_str(".0");
    }
    normalized.push_str(suffix);
    normalized
}
