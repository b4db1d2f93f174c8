//! Frontgen - front-end project boilerplate generator
//!
//! Interactively collects a handful of choices (project name, number of
//! screens, markup language, CSS/JS frameworks, jQuery) and renders a fixed
//! set of templates into a new project directory. One linear run:
//!
//! ```text
//! settings store -> prompt resolver -> fanout planner -> renderer -> settings store
//! ```
//!
//! # Modules
//!
//! - [`questions`] - declarative question list and prompt resolution
//! - [`planner`] - pure configuration -> plan-entry fanout
//! - [`render`] - the renderer collaborator boundary and its fs implementation
//! - [`templates`] - embedded template registry
//! - [`generator`] - stage orchestration
//! - [`config`] - configuration types and domain coercion
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod planner;
pub mod questions;
pub mod render;
pub mod templates;

// Re-export commonly used types
pub use config::{Answer, Configuration, Draft, FrontEndFramework, MarkupIntegration, MarkupLanguage};
pub use error::GenError;
pub use generator::{GENERATED_BY, RunOptions, dry_run, run};
pub use planner::{Bindings, PlanEntry, plan};
pub use questions::{DialoguerPrompter, Prompter, Question, QuestionKind, ScriptedAnswer, ScriptedPrompter, resolve};
pub use render::{FsRenderer, Renderer, execute};
pub use templates::TemplateId;
