//! Prompt resolution
//!
//! A declarative question list resolved against prior values in a fixed
//! order. Each question carries a key, an input kind and an optional `when`
//! predicate over the draft resolved so far; prior values (CLI options first,
//! then saved settings) answer questions silently, everything else is asked
//! through the [`Prompter`] seam.

pub mod definitions;
mod prompter;
mod resolver;

pub use definitions::{Choice, Question, QuestionKind, questions};
pub use prompter::{DialoguerPrompter, Prompter, ScriptedAnswer, ScriptedPrompter};
pub use resolver::resolve;
