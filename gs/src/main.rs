use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use gensettings::SettingsStore;
use gensettings::cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let store = SettingsStore::at(&cli.dir);

    info!("gensettings starting");

    match cli.command {
        Command::Show => match store.load()? {
            Some(doc) => {
                println!("Settings: {}", store.path().display().to_string().cyan());
                println!("  Generated by: {} {}", doc.generated_by, doc.generator_version);
                println!("  Generated at: {}", doc.generated_at);
                println!();
                for (key, value) in &doc.answers {
                    println!("  {}: {}", key.yellow(), value);
                }
            }
            None => {
                println!("No settings found at {}", store.path().display());
            }
        },
        Command::Path => {
            println!("{}", store.path().display());
        }
        Command::Clear => {
            if store.clear()? {
                println!("{} Deleted {}", "✓".green(), store.path().display());
            } else {
                println!("No settings found at {}", store.path().display());
            }
        }
    }

    Ok(())
}
