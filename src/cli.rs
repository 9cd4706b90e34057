//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::resolver::ParseMode;

/// chart-version-check - release gate for chart versions
///
/// Fails unless the bundle's version is strictly newer than every version
/// already published under its name in the index.
#[derive(Parser, Debug)]
#[command(
    name = "chart-version-check",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Check that a chart version is newer than the latest published in an index",
    long_about = "Reads the name and version from a bundle descriptor (e.g. Chart.yaml), looks up \
                  every version published under that name in an index (e.g. a Helm repository \
                  index.yaml) and succeeds only if the bundle version is strictly greater by \
                  semantic-versioning precedence.",
    after_help = "Examples:\n    \
                  chart-version-check charts/app/Chart.yaml index.yaml\n    \
                  chart-version-check --name app-legacy Chart.yaml index.yaml\n    \
                  chart-version-check --loose Chart.yaml index.yaml\n\n\
                  Exit codes:\n    \
                  0    bundle version is newer than the latest on index\n    \
                  1    validation failure (bundle version is not newer)\n    \
                  126  format error (a file or version can't be read or parsed)"
)]
pub struct Cli {
    /// Bundle descriptor file with `name` and `version` keys
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,

    /// Index file mapping bundle names to published versions
    #[arg(value_name = "INDEX")]
    pub index: PathBuf,

    /// Look up this name in the index instead of the bundle's own name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Accept a leading 'v' and missing minor/patch components in versions
    #[arg(long)]
    pub loose: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by `--verbose`/`--quiet`
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else if self.quiet {
            LevelFilter::ERROR
        } else {
            LevelFilter::INFO
        }
    }

    /// Version parsing mode selected by `--loose`
    pub fn parse_mode(&self) -> ParseMode {
        if self.loose {
            ParseMode::Loose
        } else {
            ParseMode::Strict
        }
    }
}
