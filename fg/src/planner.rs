//! Template fanout planner
//!
//! `plan` is a pure function of the resolved configuration: no I/O, no
//! interaction, same ordered entry list every time. Output ordering is
//! directories, base files, markup family (plain or Jekyll, never both),
//! per-screen styles, scripts, placeholders; per-screen loops ascend from
//! index 1. Destination paths are pairwise distinct, so entries could be
//! rendered in any order (or concurrently) without coordination.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{Configuration, FrontEndFramework, MarkupLanguage};
use crate::templates::TemplateId;

/// Variable bindings snapshot passed to template rendering
///
/// A flat struct with one boolean per conditional branch, so the Handlebars
/// templates only ever test `{{#if ...}}` on precomputed flags.
#[derive(Debug, Clone, Serialize)]
pub struct Bindings {
    pub project_name: String,
    /// Lowercased, dash-separated form for manifests and slugs
    pub project_slug: String,
    pub qty_screens: u32,
    /// 1-based indexes, for templates that iterate over all screens
    pub screens: Vec<u32>,
    /// 1-based screen index, set only on per-screen entries
    pub screen_index: Option<u32>,
    pub markup_language: String,
    pub is_pug: bool,
    pub is_jekyll: bool,
    pub framework: String,
    pub has_framework: bool,
    pub is_bootstrap: bool,
    pub is_foundation: bool,
    pub jquery: bool,
    pub generator_version: String,
    pub year: i32,
}

impl Bindings {
    /// Snapshot the configuration, without a screen index
    pub fn from_config(config: &Configuration) -> Self {
        use chrono::Datelike;
        Self {
            project_name: config.project_name.clone(),
            project_slug: config
                .project_name
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-"),
            qty_screens: config.qty_screens,
            screens: (1..=config.qty_screens).collect(),
            screen_index: None,
            markup_language: config.markup_language.to_string(),
            is_pug: config.markup_language == MarkupLanguage::Pug,
            is_jekyll: config.markup_integration.is_some(),
            framework: config.front_end_framework.to_string(),
            has_framework: config.front_end_framework.is_some(),
            is_bootstrap: config.front_end_framework == FrontEndFramework::Bootstrap,
            is_foundation: config.front_end_framework == FrontEndFramework::Foundation,
            jquery: config.jquery,
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            year: chrono::Utc::now().year(),
        }
    }

    fn for_screen(config: &Configuration, index: u32) -> Self {
        Self {
            screen_index: Some(index),
            ..Self::from_config(config)
        }
    }
}

/// One deterministic unit of output
///
/// Entries are immutable once produced and map one-to-one onto the three
/// renderer capabilities.
#[derive(Debug, Clone)]
pub enum PlanEntry {
    /// Create a directory (idempotent)
    Dir { dest: PathBuf },
    /// Expand a template with bindings and write the result
    Render {
        template: TemplateId,
        dest: PathBuf,
        bindings: Bindings,
    },
    /// Write a template's source text untouched
    Copy { template: TemplateId, dest: PathBuf },
}

impl PlanEntry {
    /// Destination path of this entry
    pub fn dest(&self) -> &Path {
        match self {
            Self::Dir { dest } | Self::Render { dest, .. } | Self::Copy { dest, .. } => dest,
        }
    }

    /// One-line description for logs and plan listings
    pub fn describe(&self) -> String {
        match self {
            Self::Dir { dest } => format!("dir     {}/", dest.display()),
            Self::Render { template, dest, .. } => format!("render  {}  <- {}", dest.display(), template.name()),
            Self::Copy { template, dest } => format!("copy    {}  <- {}", dest.display(), template.name()),
        }
    }
}

/// Source/dist/release directory groups, created before any file entries
const DIRECTORIES: &[&str] = &[
    "assets/src",
    "assets/src/fonts",
    "assets/src/icons",
    "assets/src/images",
    "assets/src/js",
    "assets/src/styles",
    "assets/src/styles/screens",
    "assets/src/markup",
    "assets/dist",
    "release",
];

/// Asset directories that get a placeholder so they survive version control
const KEEP_DIRECTORIES: &[&str] = &["assets/src/fonts", "assets/src/icons", "assets/src/images", "release"];

/// Compute the ordered plan for a resolved configuration
pub fn plan(config: &Configuration) -> Vec<PlanEntry> {
    let mut entries = Vec::new();
    let bindings = Bindings::from_config(config);

    // Directory scaffolding
    for dir in DIRECTORIES {
        entries.push(PlanEntry::Dir {
            dest: PathBuf::from(dir),
        });
    }

    // Base files, unconditional
    render(&mut entries, TemplateId::PackageManifest, "package.json", &bindings);
    copy(&mut entries, TemplateId::EditorConfig, ".editorconfig");
    copy(&mut entries, TemplateId::EslintRc, ".eslintrc");
    render(&mut entries, TemplateId::License, "LICENSE", &bindings);
    copy(&mut entries, TemplateId::GitIgnore, ".gitignore");
    copy(&mut entries, TemplateId::GitAttributes, ".gitattributes");
    render(&mut entries, TemplateId::Gulpfile, "gulpfile.js", &bindings);
    render(&mut entries, TemplateId::GulpConfig, "gulp/config.js", &bindings);
    copy(&mut entries, TemplateId::GulpClean, "gulp/tasks/clean.js");
    copy(&mut entries, TemplateId::GulpStatic, "gulp/tasks/static.js");
    copy(&mut entries, TemplateId::GulpStyles, "gulp/tasks/styles.js");
    copy(&mut entries, TemplateId::GulpScripts, "gulp/tasks/scripts.js");
    render(&mut entries, TemplateId::GulpMarkup, "gulp/tasks/markup.js", &bindings);
    render(&mut entries, TemplateId::GulpServe, "gulp/tasks/serve.js", &bindings);
    render(&mut entries, TemplateId::StylesMain, "assets/src/styles/main.scss", &bindings);
    copy(&mut entries, TemplateId::StylesVariables, "assets/src/styles/_variables.scss");
    render(&mut entries, TemplateId::ScriptMain, "assets/src/js/main.js", &bindings);

    // Markup family: Jekyll tree replaces the plain screen templates entirely
    if config.markup_integration.is_some() {
        render(&mut entries, TemplateId::JekyllConfig, "_config.yml", &bindings);
        copy(&mut entries, TemplateId::JekyllGemfile, "Gemfile");
        copy(&mut entries, TemplateId::GulpJekyll, "gulp/tasks/jekyll.js");
        render(
            &mut entries,
            TemplateId::JekyllHead,
            "assets/src/markup/_includes/head.html",
            &bindings,
        );
        render(
            &mut entries,
            TemplateId::JekyllFoot,
            "assets/src/markup/_includes/foot.html",
            &bindings,
        );
        render(
            &mut entries,
            TemplateId::JekyllLayout,
            "assets/src/markup/_layouts/default.html",
            &bindings,
        );
        for index in 1..=config.qty_screens {
            entries.push(PlanEntry::Render {
                template: TemplateId::JekyllScreen,
                dest: PathBuf::from(format!("assets/src/markup/screen-{}.html", index)),
                bindings: Bindings::for_screen(config, index),
            });
        }
    } else {
        if config.markup_language == MarkupLanguage::Pug {
            render(&mut entries, TemplateId::PugLayout, "assets/src/markup/layout.pug", &bindings);
            render(
                &mut entries,
                TemplateId::PugHead,
                "assets/src/markup/includes/head.pug",
                &bindings,
            );
            render(
                &mut entries,
                TemplateId::PugFoot,
                "assets/src/markup/includes/foot.pug",
                &bindings,
            );
        }
        let template = match config.markup_language {
            MarkupLanguage::Html => TemplateId::ScreenHtml,
            MarkupLanguage::Pug => TemplateId::ScreenPug,
        };
        for index in 1..=config.qty_screens {
            entries.push(PlanEntry::Render {
                template,
                dest: PathBuf::from(format!(
                    "assets/src/markup/screen-{}.{}",
                    index,
                    config.markup_language.extension()
                )),
                bindings: Bindings::for_screen(config, index),
            });
        }
    }

    // Per-screen style partials, regardless of markup branch
    for index in 1..=config.qty_screens {
        entries.push(PlanEntry::Render {
            template: TemplateId::StylesScreen,
            dest: PathBuf::from(format!("assets/src/styles/screens/_screen-{}.scss", index)),
            bindings: Bindings::for_screen(config, index),
        });
    }

    // Conditional scripts
    if config.jquery {
        copy(&mut entries, TemplateId::ScriptJquery, "assets/src/js/jquery.init.js");
    }
    match config.front_end_framework {
        FrontEndFramework::Bootstrap => copy(&mut entries, TemplateId::ScriptBootstrap, "assets/src/js/bootstrap.js"),
        FrontEndFramework::Foundation => {
            copy(&mut entries, TemplateId::ScriptFoundation, "assets/src/js/foundation.js");
        }
        FrontEndFramework::None => {}
    }

    // Placeholders keeping empty asset directories under version control
    for dir in KEEP_DIRECTORIES {
        copy(&mut entries, TemplateId::Keep, &format!("{}/.gitkeep", dir));
    }

    debug_assert!(destinations_disjoint(&entries), "plan entries must not collide");
    debug!(count = entries.len(), "Plan computed");
    entries
}

fn render(entries: &mut Vec<PlanEntry>, template: TemplateId, dest: &str, bindings: &Bindings) {
    entries.push(PlanEntry::Render {
        template,
        dest: PathBuf::from(dest),
        bindings: bindings.clone(),
    });
}

fn copy(entries: &mut Vec<PlanEntry>, template: TemplateId, dest: &str) {
    entries.push(PlanEntry::Copy {
        template,
        dest: PathBuf::from(dest),
    });
}

/// No two entries may target the same destination path
fn destinations_disjoint(entries: &[PlanEntry]) -> bool {
    let mut seen = std::collections::HashSet::new();
    entries.iter().all(|e| seen.insert(e.dest().to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MarkupIntegration, MarkupLanguage};

    fn base_config() -> Configuration {
        Configuration {
            project_name: "Acme".to_string(),
            qty_screens: 2,
            markup_language: MarkupLanguage::Html,
            markup_integration: MarkupIntegration::None,
            front_end_framework: FrontEndFramework::Bootstrap,
            jquery: false,
        }
    }

    fn dests(entries: &[PlanEntry]) -> Vec<String> {
        entries.iter().map(|e| e.dest().display().to_string()).collect()
    }

    #[test]
    fn test_concrete_bootstrap_scenario() {
        // {Acme, 2 screens, html, no integration, bootstrap, no jQuery}
        let entries = plan(&base_config());
        let dests = dests(&entries);

        assert!(dests.contains(&"assets/src/markup/screen-1.html".to_string()));
        assert!(dests.contains(&"assets/src/markup/screen-2.html".to_string()));
        assert!(!dests.contains(&"assets/src/markup/screen-3.html".to_string()));
        assert!(dests.contains(&"assets/src/styles/screens/_screen-1.scss".to_string()));
        assert!(dests.contains(&"assets/src/styles/screens/_screen-2.scss".to_string()));
        assert!(dests.contains(&"assets/src/js/bootstrap.js".to_string()));
        assert!(!dests.contains(&"assets/src/js/jquery.init.js".to_string()));
        assert!(!dests.iter().any(|d| d.contains("_config.yml") || d.contains("_layouts")));
    }

    #[test]
    fn test_screen_count_scaling() {
        for n in [1u32, 3, 7] {
            let config = Configuration {
                qty_screens: n,
                ..base_config()
            };
            let entries = plan(&config);
            let markup = entries
                .iter()
                .filter(|e| e.dest().starts_with("assets/src/markup") && dest_is_screen(e))
                .count();
            let styles = entries
                .iter()
                .filter(|e| {
                    matches!(e, PlanEntry::Render { .. })
                        && e.dest().starts_with("assets/src/styles/screens")
                })
                .count();
            assert_eq!(markup, n as usize);
            assert_eq!(styles, n as usize);
        }
    }

    fn dest_is_screen(entry: &PlanEntry) -> bool {
        entry
            .dest()
            .file_name()
            .and_then(|f| f.to_str())
            .map(|f| f.starts_with("screen-"))
            .unwrap_or(false)
    }

    #[test]
    fn test_markup_branch_mutual_exclusion() {
        let plain = plan(&base_config());
        assert!(!dests(&plain).iter().any(|d| d.contains("_includes") || d.contains("_layouts")));

        let jekyll = plan(&Configuration {
            markup_integration: MarkupIntegration::Jekyll,
            ..base_config()
        });
        let jekyll_dests = dests(&jekyll);
        assert!(jekyll_dests.contains(&"_config.yml".to_string()));
        assert!(jekyll_dests.contains(&"gulp/tasks/jekyll.js".to_string()));
        assert!(jekyll_dests.contains(&"assets/src/markup/_layouts/default.html".to_string()));
        // Jekyll screens replace the plain family; same destinations, jekyll-flavored template
        let screens: Vec<_> = jekyll
            .iter()
            .filter_map(|e| match e {
                PlanEntry::Render { template, dest, .. } if dest_is_screen(e) && dest.starts_with("assets/src/markup") => {
                    Some(*template)
                }
                _ => None,
            })
            .collect();
        assert_eq!(screens, vec![TemplateId::JekyllScreen, TemplateId::JekyllScreen]);
    }

    #[test]
    fn test_jekyll_screens_ignore_markup_language() {
        let entries = plan(&Configuration {
            markup_language: MarkupLanguage::Pug,
            markup_integration: MarkupIntegration::Jekyll,
            ..base_config()
        });
        let dests = dests(&entries);
        assert!(dests.contains(&"assets/src/markup/screen-1.html".to_string()));
        assert!(!dests.iter().any(|d| d.ends_with(".pug")));
    }

    #[test]
    fn test_pug_plans_shared_layout_and_includes() {
        let entries = plan(&Configuration {
            markup_language: MarkupLanguage::Pug,
            ..base_config()
        });
        let dests = dests(&entries);
        assert!(dests.contains(&"assets/src/markup/layout.pug".to_string()));
        assert!(dests.contains(&"assets/src/markup/includes/head.pug".to_string()));
        assert!(dests.contains(&"assets/src/markup/includes/foot.pug".to_string()));
        assert!(dests.contains(&"assets/src/markup/screen-1.pug".to_string()));
    }

    #[test]
    fn test_script_entries_follow_flags() {
        let entries = plan(&Configuration {
            front_end_framework: FrontEndFramework::None,
            jquery: true,
            ..base_config()
        });
        let dests = dests(&entries);
        assert!(dests.contains(&"assets/src/js/jquery.init.js".to_string()));
        assert!(!dests.contains(&"assets/src/js/bootstrap.js".to_string()));
        assert!(!dests.contains(&"assets/src/js/foundation.js".to_string()));
    }

    #[test]
    fn test_ordering_directories_first_screens_ascending() {
        let entries = plan(&base_config());
        let first_file = entries.iter().position(|e| !matches!(e, PlanEntry::Dir { .. })).unwrap();
        assert!(
            entries[..first_file].iter().all(|e| matches!(e, PlanEntry::Dir { .. })),
            "all directory entries precede file entries"
        );

        let screen_positions: Vec<usize> = (1..=2)
            .map(|i| {
                entries
                    .iter()
                    .position(|e| e.dest() == Path::new(&format!("assets/src/markup/screen-{}.html", i)))
                    .unwrap()
            })
            .collect();
        assert!(screen_positions[0] < screen_positions[1], "screens ascend by index");
    }

    #[test]
    fn test_determinism_and_disjoint_destinations() {
        let config = Configuration {
            markup_language: MarkupLanguage::Pug,
            markup_integration: MarkupIntegration::Jekyll,
            jquery: true,
            qty_screens: 5,
            ..base_config()
        };
        let a = dests(&plan(&config));
        let b = dests(&plan(&config));
        assert_eq!(a, b, "same configuration, same ordered plan");

        let unique: std::collections::HashSet<_> = a.iter().collect();
        assert_eq!(unique.len(), a.len(), "destination paths are pairwise distinct");
    }

    #[test]
    fn test_placeholders_for_empty_asset_directories() {
        let dests = dests(&plan(&base_config()));
        for dir in ["assets/src/fonts", "assets/src/icons", "assets/src/images", "release"] {
            assert!(dests.contains(&format!("{}/.gitkeep", dir)));
        }
    }

    #[test]
    fn test_screen_bindings_carry_index() {
        let entries = plan(&base_config());
        let entry = entries
            .iter()
            .find(|e| e.dest() == Path::new("assets/src/markup/screen-2.html"))
            .unwrap();
        match entry {
            PlanEntry::Render { bindings, .. } => assert_eq!(bindings.screen_index, Some(2)),
            other => panic!("expected render entry, got {:?}", other),
        }
    }
}
