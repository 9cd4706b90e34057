//! Release gate decision

use std::cmp::Ordering;

use semver::Version;

use crate::resolver::cmp_precedence;

/// Verdict of comparing a bundle version against the latest published one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Bundle version is strictly newer than the latest on index
    Pass,

    /// Bundle version is older than or equal to the latest on index
    Fail,
}

/// Decide whether `bundle` may be published on top of `latest`
///
/// Equal precedence is a failure: a release must advance the version.
pub fn decide(bundle: &Version, latest: &Version) -> Outcome {
    match cmp_precedence(bundle, latest) {
        Ordering::Greater => Outcome::Pass,
        Ordering::Less | Ordering::Equal => Outcome::Fail,
    }
}
