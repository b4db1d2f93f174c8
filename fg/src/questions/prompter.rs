//! Interactive input seam
//!
//! The resolver talks to a [`Prompter`] trait so tests can script answers.
//! The real implementation wraps dialoguer; Esc/Ctrl-C during a prompt
//! surfaces as an error and aborts the run before anything is written.

use std::cell::RefCell;
use std::collections::VecDeque;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use eyre::{Result, eyre};
use tracing::debug;

/// Blocking interactive input
pub trait Prompter {
    /// Ask for free text
    fn input(&self, message: &str) -> Result<String>;

    /// Ask for a single choice; returns the chosen index
    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Ask a yes/no question
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str) -> Result<String> {
        debug!(%message, "DialoguerPrompter::input");
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize> {
        debug!(%message, ?items, "DialoguerPrompter::select");
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact_opt()?
            .ok_or_else(|| eyre!("Prompt cancelled"))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        debug!(%message, default, "DialoguerPrompter::confirm");
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_opt()?
            .ok_or_else(|| eyre!("Prompt cancelled"))
    }
}

/// A scripted answer for [`ScriptedPrompter`]
#[derive(Debug, Clone)]
pub enum ScriptedAnswer {
    Text(String),
    Index(usize),
    Flag(bool),
}

/// Prompter that replays a fixed script (for testing)
#[derive(Default)]
pub struct ScriptedPrompter {
    script: RefCell<VecDeque<ScriptedAnswer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Messages of every prompt that was shown, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, message: &str) -> Result<ScriptedAnswer> {
        self.asked.borrow_mut().push(message.to_string());
        self.script
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| eyre!("Unscripted prompt: {}", message))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str) -> Result<String> {
        match self.next(message)? {
            ScriptedAnswer::Text(s) => Ok(s),
            other => Err(eyre!("Expected text answer for {}, got {:?}", message, other)),
        }
    }

    fn select(&self, message: &str, items: &[&str], _default: usize) -> Result<usize> {
        match self.next(message)? {
            ScriptedAnswer::Index(i) if i < items.len() => Ok(i),
            other => Err(eyre!("Expected choice index for {}, got {:?}", message, other)),
        }
    }

    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message)? {
            ScriptedAnswer::Flag(b) => Ok(b),
            other => Err(eyre!("Expected yes/no answer for {}, got {:?}", message, other)),
        }
    }
}
