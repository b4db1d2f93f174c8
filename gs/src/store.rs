//! Core SettingsStore implementation

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The persisted settings document
///
/// The six answer keys are flattened alongside the provenance fields, so the
/// on-disk JSON reads as one flat object:
///
/// ```json
/// {
///   "projectName": "Acme",
///   "qtyScreens": 2,
///   "generatedBy": "frontgen",
///   "generatedAt": "2026-08-29T12:00:00+00:00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDoc {
    /// Resolved answers, keyed by option name (camelCase wire form)
    #[serde(flatten)]
    pub answers: BTreeMap<String, Value>,

    /// Name of the tool that wrote this document
    #[serde(rename = "generatedBy")]
    pub generated_by: String,

    /// Version of the tool that wrote this document
    #[serde(rename = "generatorVersion")]
    pub generator_version: String,

    /// ISO-8601 timestamp of the run that wrote this document
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
}

impl SettingsDoc {
    /// Create a document from resolved answers, stamping provenance now
    pub fn new(answers: BTreeMap<String, Value>, generated_by: &str, generator_version: &str) -> Self {
        Self {
            answers,
            generated_by: generated_by.to_string(),
            generator_version: generator_version.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Store for a project's settings document
pub struct SettingsStore {
    /// Project directory the document lives in
    project_dir: PathBuf,
}

impl SettingsStore {
    /// Create a store rooted at the given project directory
    pub fn at(project_dir: impl AsRef<Path>) -> Self {
        let project_dir = project_dir.as_ref().to_path_buf();
        debug!(?project_dir, "Opened settings store");
        Self { project_dir }
    }

    /// Path of the settings document
    pub fn path(&self) -> PathBuf {
        self.project_dir.join(crate::SETTINGS_FILE_NAME)
    }

    /// Load a previous run's document
    ///
    /// A missing file is not an error and resolves to `Ok(None)`. A file that
    /// exists but cannot be read or parsed is an error; callers treat it as
    /// non-fatal (log a warning and proceed as if absent).
    pub fn load(&self) -> Result<Option<SettingsDoc>> {
        let path = self.path();
        if !path.exists() {
            debug!(?path, "No settings document found");
            return Ok(None);
        }

        let content = fs::read_to_string(&path).context(format!("Failed to read settings: {}", path.display()))?;
        let doc: SettingsDoc =
            serde_json::from_str(&content).context(format!("Malformed settings: {}", path.display()))?;
        debug!(?path, generated_at = %doc.generated_at, "Loaded settings document");
        Ok(Some(doc))
    }

    /// Persist a document, overwriting any previous one
    pub fn save(&self, doc: &SettingsDoc) -> Result<()> {
        let path = self.path();
        fs::create_dir_all(&self.project_dir)
            .context(format!("Failed to create project directory: {}", self.project_dir.display()))?;
        let content = serde_json::to_string_pretty(doc)?;
        fs::write(&path, content).context(format!("Failed to write settings: {}", path.display()))?;
        info!(?path, "Saved settings document");
        Ok(())
    }

    /// Delete the document if present; returns whether one was deleted
    pub fn clear(&self) -> Result<bool> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).context(format!("Failed to delete settings: {}", path.display()))?;
            info!(?path, "Deleted settings document");
            return Ok(true);
        }
        Ok(false)
    }
}
