//! Template registry
//!
//! Every output file the planner can produce has a [`TemplateId`] whose
//! source text is compiled into the binary from `fg/templates/`. Templates
//! that carry variables use Handlebars syntax; the rest are copied verbatim.

mod embedded;

/// Identifier of an embedded template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    // Base files
    PackageManifest,
    EditorConfig,
    EslintRc,
    License,
    GitIgnore,
    GitAttributes,

    // Gulp pipeline
    Gulpfile,
    GulpConfig,
    GulpClean,
    GulpStatic,
    GulpStyles,
    GulpScripts,
    GulpMarkup,
    GulpServe,
    GulpJekyll,

    // Styles
    StylesMain,
    StylesVariables,
    StylesScreen,

    // Scripts
    ScriptMain,
    ScriptJquery,
    ScriptBootstrap,
    ScriptFoundation,

    // Plain markup
    ScreenHtml,
    ScreenPug,
    PugLayout,
    PugHead,
    PugFoot,

    // Jekyll markup
    JekyllConfig,
    JekyllGemfile,
    JekyllScreen,
    JekyllHead,
    JekyllFoot,
    JekyllLayout,

    // Placeholder for otherwise-empty directories
    Keep,
}

impl TemplateId {
    /// Embedded source text
    pub fn source(&self) -> &'static str {
        embedded::content(*self)
    }

    /// Short name for logs and plan listings
    pub fn name(&self) -> &'static str {
        match self {
            Self::PackageManifest => "base/package.json",
            Self::EditorConfig => "base/editorconfig",
            Self::EslintRc => "base/eslintrc",
            Self::License => "base/license",
            Self::GitIgnore => "git/gitignore",
            Self::GitAttributes => "git/gitattributes",
            Self::Gulpfile => "gulp/gulpfile",
            Self::GulpConfig => "gulp/config",
            Self::GulpClean => "gulp/tasks/clean",
            Self::GulpStatic => "gulp/tasks/static",
            Self::GulpStyles => "gulp/tasks/styles",
            Self::GulpScripts => "gulp/tasks/scripts",
            Self::GulpMarkup => "gulp/tasks/markup",
            Self::GulpServe => "gulp/tasks/serve",
            Self::GulpJekyll => "gulp/tasks/jekyll",
            Self::StylesMain => "styles/main",
            Self::StylesVariables => "styles/variables",
            Self::StylesScreen => "styles/screen",
            Self::ScriptMain => "scripts/main",
            Self::ScriptJquery => "scripts/jquery",
            Self::ScriptBootstrap => "scripts/bootstrap",
            Self::ScriptFoundation => "scripts/foundation",
            Self::ScreenHtml => "markup/screen.html",
            Self::ScreenPug => "markup/screen.pug",
            Self::PugLayout => "markup/layout.pug",
            Self::PugHead => "markup/includes/head.pug",
            Self::PugFoot => "markup/includes/foot.pug",
            Self::JekyllConfig => "jekyll/config",
            Self::JekyllGemfile => "jekyll/gemfile",
            Self::JekyllScreen => "jekyll/screen",
            Self::JekyllHead => "jekyll/includes/head",
            Self::JekyllFoot => "jekyll/includes/foot",
            Self::JekyllLayout => "jekyll/layouts/default",
            Self::Keep => "misc/gitkeep",
        }
    }
}
