//! Check command implementation
//!
//! Runs the gate pipeline: read bundle, read index, resolve versions, decide.

use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{read_bundle, read_index};
use crate::error::{self, Result};
use crate::gate::{Outcome, decide};
use crate::resolver::{parse_version, resolve_latest};

/// Run the version check
///
/// A bundle version that does not advance past the index is reported as
/// [`CheckError::VersionNotNewer`](crate::error::CheckError::VersionNotNewer).
pub fn run(cli: &Cli) -> Result<()> {
    let bundle = read_bundle(&cli.bundle)?;
    let name = cli.name.as_deref().unwrap_or(&bundle.name);
    if name != bundle.name {
        debug!(bundle = %bundle.name, lookup = name, "looking up index under another name");
    }

    let index = read_index(&cli.index)?;

    let mode = cli.parse_mode();
    let origin = format!("bundle file {}", cli.bundle.display());
    let bundle_version = parse_version(&bundle.version, &origin, mode)?;
    let latest = resolve_latest(name, &index, mode)?;

    match decide(&bundle_version, &latest) {
        Outcome::Pass => {
            info!("The chart version ({bundle_version}) is greater than the latest on index ({latest})");
            Ok(())
        }
        Outcome::Fail => Err(error::version::not_newer(&bundle_version, &latest)),
    }
}
