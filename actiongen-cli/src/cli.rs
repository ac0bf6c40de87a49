//! CLI argument surface for the metadata generator.

use std::path::PathBuf;

use clap::Parser;

use crate::generate::ALL_NAMESPACES;

#[derive(Parser, Debug)]
#[command(name = "actiongen")]
#[command(version)]
#[command(about = "Generate invocation metadata for registered console commands")]
#[command(long_about = "
actiongen introspects every command registered in the catalog and writes one
YAML metadata document per command, describing how to invoke it
programmatically.

Example usage:
  actiongen                          # Generate metadata for every command
  actiongen --ns server              # Only the server namespace
  actiongen --path ./pack --debug    # Custom output directory, debug logs
")]
pub struct Cli {
    /// Only generate commands whose invocation text starts with this prefix
    #[arg(long = "ns", short = 'n', default_value = ALL_NAMESPACES)]
    pub namespace: String,

    /// Directory the metadata documents are written into
    #[arg(long, short = 'p', default_value = "pack")]
    pub path: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,
}
