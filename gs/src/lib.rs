//! GenSettings - persisted generator settings
//!
//! Stores the resolved answers of a generator run as a single JSON document
//! inside the generated project, so a subsequent run in the same directory
//! is idempotent by default (prior answers become the new defaults).
//!
//! # Layout
//!
//! ```text
//! my-project/
//! └── .frontgen.json    # answers + provenance (generatedBy, generatorVersion, generatedAt)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use gensettings::{SettingsDoc, SettingsStore};
//!
//! let store = SettingsStore::at("my-project");
//! if let Some(doc) = store.load()? {
//!     println!("previous run: {}", doc.generated_at);
//! }
//! ```

pub mod cli;
mod store;

pub use store::{SettingsDoc, SettingsStore};

/// File name of the settings document, relative to the project directory
pub const SETTINGS_FILE_NAME: &str = ".frontgen.json";
