//! CLI command definitions
//!
//! Any option present at invocation is an effective prior value: the matching
//! question is answered silently (after coercion and validation). The
//! value-carrying flags are plain strings on purpose, so a bad value surfaces
//! as the generator's own validation error rather than a clap parse error.

use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{
    Answer, KEY_FRONT_END_FRAMEWORK, KEY_JQUERY, KEY_MARKUP_INTEGRATION, KEY_MARKUP_LANGUAGE, KEY_PROJECT_NAME,
    KEY_QTY_SCREENS,
};

/// Frontgen - front-end project boilerplate generator
#[derive(Parser)]
#[command(
    name = "frontgen",
    about = "Scaffold a front-end project: gulp pipeline, SCSS/JS skeletons, HTML/Pug screens",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Destination project directory
    #[arg(short, long, global = true, default_value = ".")]
    pub dest: PathBuf,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Suppress the welcome banner
    #[arg(long, global = true)]
    pub skip_welcome: bool,

    /// Project name, e.g. "Acme Landing"
    #[arg(long, global = true, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Number of screens to scaffold (positive integer)
    #[arg(long, global = true, value_name = "N")]
    pub qty_screens: Option<String>,

    /// Markup language [html, pug]
    #[arg(long, global = true, value_name = "LANG")]
    pub markup_language: Option<String>,

    /// Markup integration [false, jekyll]
    #[arg(long, global = true, value_name = "INTEGRATION")]
    pub markup_integration: Option<String>,

    /// CSS framework [false, bootstrap, foundation]
    #[arg(long, global = true, value_name = "FRAMEWORK")]
    pub front_end_framework: Option<String>,

    /// Include jQuery [true, false]
    #[arg(long, global = true, value_name = "BOOL")]
    pub jquery: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands; no subcommand runs the full generation
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the configuration and print the plan without writing anything
    Plan,
}

impl Cli {
    /// CLI-supplied prior values, keyed by option name
    pub fn overrides(&self) -> BTreeMap<String, Answer> {
        let mut map = BTreeMap::new();
        if let Some(v) = &self.project_name {
            map.insert(KEY_PROJECT_NAME.to_string(), Answer::Str(v.clone()));
        }
        if let Some(v) = &self.qty_screens {
            map.insert(KEY_QTY_SCREENS.to_string(), Answer::Str(v.clone()));
        }
        if let Some(v) = &self.markup_language {
            map.insert(KEY_MARKUP_LANGUAGE.to_string(), Answer::Str(v.clone()));
        }
        if let Some(v) = &self.markup_integration {
            map.insert(KEY_MARKUP_INTEGRATION.to_string(), Answer::Str(v.clone()));
        }
        if let Some(v) = &self.front_end_framework {
            map.insert(KEY_FRONT_END_FRAMEWORK.to_string(), Answer::Str(v.clone()));
        }
        if let Some(v) = self.jquery {
            map.insert(KEY_JQUERY.to_string(), Answer::Bool(v));
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_contain_supplied_flags() {
        let cli = Cli::parse_from(["fg", "--project-name", "Acme", "--qty-screens", "3"]);
        let map = cli.overrides();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(KEY_PROJECT_NAME), Some(&Answer::Str("Acme".to_string())));
        assert_eq!(map.get(KEY_QTY_SCREENS), Some(&Answer::Str("3".to_string())));
    }

    #[test]
    fn test_plan_subcommand_accepts_global_options() {
        let cli = Cli::parse_from(["fg", "plan", "--markup-language", "pug", "--jquery", "true"]);
        assert!(matches!(cli.command, Some(Command::Plan)));
        let map = cli.overrides();
        assert_eq!(map.get(KEY_MARKUP_LANGUAGE), Some(&Answer::Str("pug".to_string())));
        assert_eq!(map.get(KEY_JQUERY), Some(&Answer::Bool(true)));
    }
}
