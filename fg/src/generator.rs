//! Run orchestration
//!
//! One linear sequence of stages per run: load settings, resolve prompts,
//! plan, render, save settings. No stage begins before the previous one
//! completes, and nothing is written before resolution has finished.

use std::collections::BTreeMap;
use std::path::PathBuf;

use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use gensettings::{SettingsDoc, SettingsStore};

use crate::config::{Answer, Configuration};
use crate::error::GenError;
use crate::planner::plan;
use crate::questions::{Prompter, resolve};
use crate::render::{FsRenderer, execute};

/// Tool name stamped into the settings document
pub const GENERATED_BY: &str = "frontgen";

/// Inputs of a single run
pub struct RunOptions {
    /// Destination project directory
    pub dest: PathBuf,
    /// Suppress the welcome banner
    pub skip_welcome: bool,
    /// CLI-supplied prior values, keyed by option name
    pub overrides: BTreeMap<String, Answer>,
}

/// Full run: resolve, plan, render, persist
pub fn run(prompter: &dyn Prompter, opts: &RunOptions) -> Result<Configuration> {
    if !opts.skip_welcome {
        println!("{}", " Frontgen boilerplate generator ".bold().white().on_red());
        println!();
    }

    let store = SettingsStore::at(&opts.dest);
    let config = resolve_configuration(prompter, opts, &store)?;

    info!("Planning");
    let entries = plan(&config);
    println!(
        "Generating {} into {}",
        config.project_name.cyan(),
        opts.dest.display().to_string().cyan()
    );

    info!("Rendering {} entries", entries.len());
    let mut renderer = FsRenderer::new(&opts.dest);
    execute(&entries, &mut renderer)?;

    info!("Saving settings");
    let doc = SettingsDoc::new(config.to_answers(), GENERATED_BY, env!("CARGO_PKG_VERSION"));
    store.save(&doc).context("Failed to save settings")?;

    println!();
    println!("{} Done. {} entries written.", "✓".green(), entries.len());
    Ok(config)
}

/// Dry run: resolve and print the plan without touching the filesystem
pub fn dry_run(prompter: &dyn Prompter, opts: &RunOptions) -> Result<Configuration> {
    let store = SettingsStore::at(&opts.dest);
    let config = resolve_configuration(prompter, opts, &store)?;

    let entries = plan(&config);
    println!("Plan for {} ({} entries):", config.project_name.cyan(), entries.len());
    for entry in &entries {
        println!("  {}", entry.describe());
    }
    Ok(config)
}

fn resolve_configuration(prompter: &dyn Prompter, opts: &RunOptions, store: &SettingsStore) -> Result<Configuration> {
    info!("Loading saved settings");
    let saved = load_prior_answers(store);

    info!("Resolving configuration");
    resolve(prompter, &opts.overrides, &saved)
}

/// Prior answers from a previous run's settings document
///
/// Missing document: empty defaults. Unreadable/malformed document: warn and
/// proceed as if absent (non-fatal by design).
fn load_prior_answers(store: &SettingsStore) -> BTreeMap<String, Answer> {
    match store.load() {
        Ok(Some(doc)) => {
            debug!(generated_at = %doc.generated_at, "Using saved settings as defaults");
            doc.answers
                .iter()
                .filter_map(|(key, value)| Answer::from_json(value).map(|a| (key.clone(), a)))
                .collect()
        }
        Ok(None) => BTreeMap::new(),
        Err(e) => {
            let err = GenError::SettingsRead(e.to_string());
            warn!(%err, "Ignoring saved settings");
            println!("{} {}", "⚠".yellow(), err);
            BTreeMap::new()
        }
    }
}
