//! chart-version-check - release gate for chart versions
//!
//! Exits successfully only when a bundle's declared version is strictly newer
//! than the latest version published under its name in a version index.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod gate;
mod logging;
mod resolver;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    if let Err(e) = commands::check::run(&cli) {
        logging::report(&e);
        std::process::exit(e.exit_code());
    }
}
