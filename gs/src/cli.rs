//! CLI argument parsing for gensettings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gs")]
#[command(author, version, about = "Inspect persisted generator settings", long_about = None)]
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pretty-print the project's saved settings
    Show,

    /// Print the path of the settings document
    Path,

    /// Delete the settings document (the next run prompts from scratch)
    Clear,
}
