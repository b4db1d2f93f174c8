//! Frontgen CLI entry point

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use frontgen::cli::{Cli, Command};
use frontgen::generator::{self, RunOptions};
use frontgen::questions::DialoguerPrompter;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Default WARN keeps the interactive output clean; raise with --log-level
    let level = match cli_log_level.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let opts = RunOptions {
        dest: cli.dest.clone(),
        skip_welcome: cli.skip_welcome,
        overrides: cli.overrides(),
    };
    let prompter = DialoguerPrompter::default();

    debug!(command = ?cli.command, dest = ?opts.dest, "main: dispatching");
    match cli.command {
        Some(Command::Plan) => {
            generator::dry_run(&prompter, &opts)?;
        }
        None => {
            generator::run(&prompter, &opts)?;
        }
    }

    Ok(())
}
