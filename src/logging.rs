//! Diagnostic output setup
//!
//! All diagnostics go to stderr through `tracing`. `RUST_LOG` overrides the
//! level picked from the command line.

use std::io::IsTerminal;

use miette::Diagnostic;
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::CheckError;

/// Install the global stderr subscriber
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Called once from main; a failed install only means a subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

/// Log a terminal error once, with its diagnostic code and help
pub fn report(err: &CheckError) {
    let code = err.code().map(|c| c.to_string()).unwrap_or_default();
    match err.help() {
        Some(help) => error!(%code, %help, "{err}"),
        None => error!(%code, "{err}"),
    }
}
