//! actiongen: generate invocation metadata for registered console commands.

mod cli;
mod commands;
mod exit_codes;
mod generate;

use std::process;

use clap::Parser;

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = cli::Cli::parse();
    configure_logging(cli.debug);

    let catalog = commands::builtin_catalog();
    tracing::debug!(commands = catalog.len(), "catalog assembled");

    match generate::run(&catalog, &cli.namespace, &cli.path) {
        Ok(0) => process::exit(EXIT_SUCCESS),
        Ok(failures) => {
            tracing::error!("{failures} command(s) failed to generate");
            process::exit(EXIT_ERROR);
        }
        Err(error) => {
            eprintln!("{error:#}");
            process::exit(EXIT_ERROR);
        }
    }
}

fn configure_logging(debug: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if debug { Level::DEBUG } else { Level::INFO };

    registry()
        .with(EnvFilter::new(log_level.to_string()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
