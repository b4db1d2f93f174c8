//! Plan rendering
//!
//! The core only ever calls the three [`Renderer`] capabilities; it never
//! inspects file contents. [`FsRenderer`] is the real implementation,
//! expanding Handlebars templates and writing below a destination root.
//! Execution stops at the first failed entry; files already written stay on
//! disk (re-running overwrites them).

use colored::*;
use handlebars::Handlebars;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::GenError;
use crate::planner::{Bindings, PlanEntry};
use crate::templates::TemplateId;

/// The template capability consumed from the renderer collaborator
pub trait Renderer {
    /// Create a directory; creating an existing one is a no-op
    fn ensure_directory(&mut self, dest: &Path) -> Result<(), GenError>;

    /// Expand a template with bindings and write the result to `dest`
    fn render_template(&mut self, template: TemplateId, dest: &Path, bindings: &Bindings) -> Result<(), GenError>;

    /// Write a template's source text to `dest` untouched
    fn copy_verbatim(&mut self, template: TemplateId, dest: &Path) -> Result<(), GenError>;
}

/// Filesystem renderer rooted at the destination project directory
pub struct FsRenderer {
    root: PathBuf,
    hbs: Handlebars<'static>,
}

impl FsRenderer {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let mut hbs = Handlebars::new();
        // Generated markup may legitimately contain &, <, > in text nodes
        hbs.register_escape_fn(handlebars::no_escape);
        Self {
            root: root.as_ref().to_path_buf(),
            hbs,
        }
    }

    fn write(&self, dest: &Path, content: &str) -> Result<(), GenError> {
        let path = self.root.join(dest);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| render_error(dest, e))?;
        }
        fs::write(&path, content).map_err(|e| render_error(dest, e))?;
        debug!(?path, bytes = content.len(), "Wrote file");
        Ok(())
    }
}

fn render_error(dest: &Path, reason: impl std::fmt::Display) -> GenError {
    GenError::Render {
        dest: dest.display().to_string(),
        reason: reason.to_string(),
    }
}

impl Renderer for FsRenderer {
    fn ensure_directory(&mut self, dest: &Path) -> Result<(), GenError> {
        let path = self.root.join(dest);
        fs::create_dir_all(&path).map_err(|e| render_error(dest, e))?;
        debug!(?path, "Ensured directory");
        Ok(())
    }

    fn render_template(&mut self, template: TemplateId, dest: &Path, bindings: &Bindings) -> Result<(), GenError> {
        let content = self
            .hbs
            .render_template(template.source(), bindings)
            .map_err(|e| render_error(dest, e))?;
        self.write(dest, &content)
    }

    fn copy_verbatim(&mut self, template: TemplateId, dest: &Path) -> Result<(), GenError> {
        self.write(dest, template.source())
    }
}

/// Realize a plan, echoing each entry; aborts on the first failure
pub fn execute(entries: &[PlanEntry], renderer: &mut dyn Renderer) -> Result<(), GenError> {
    for entry in entries {
        match entry {
            PlanEntry::Dir { dest } => renderer.ensure_directory(dest)?,
            PlanEntry::Render {
                template,
                dest,
                bindings,
            } => renderer.render_template(*template, dest, bindings)?,
            PlanEntry::Copy { template, dest } => renderer.copy_verbatim(*template, dest)?,
        }
        println!("  {} {}", "✓".green(), entry.describe());
    }
    info!(count = entries.len(), "Plan rendered");
    Ok(())
}
