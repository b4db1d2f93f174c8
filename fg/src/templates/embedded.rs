//! Embedded template sources
//!
//! Compiled into the binary from fg/templates/ at build time.

use super::TemplateId;

const PACKAGE_MANIFEST: &str = include_str!("../../templates/base/package.json.hbs");
const EDITOR_CONFIG: &str = include_str!("../../templates/base/editorconfig");
const ESLINT_RC: &str = include_str!("../../templates/base/eslintrc");
const LICENSE: &str = include_str!("../../templates/base/LICENSE.hbs");
const GIT_IGNORE: &str = include_str!("../../templates/git/gitignore");
const GIT_ATTRIBUTES: &str = include_str!("../../templates/git/gitattributes");

const GULPFILE: &str = include_str!("../../templates/gulp/gulpfile.js.hbs");
const GULP_CONFIG: &str = include_str!("../../templates/gulp/config.js.hbs");
const GULP_CLEAN: &str = include_str!("../../templates/gulp/tasks/clean.js");
const GULP_STATIC: &str = include_str!("../../templates/gulp/tasks/static.js");
const GULP_STYLES: &str = include_str!("../../templates/gulp/tasks/styles.js");
const GULP_SCRIPTS: &str = include_str!("../../templates/gulp/tasks/scripts.js");
const GULP_MARKUP: &str = include_str!("../../templates/gulp/tasks/markup.js.hbs");
const GULP_SERVE: &str = include_str!("../../templates/gulp/tasks/serve.js.hbs");
const GULP_JEKYLL: &str = include_str!("../../templates/gulp/tasks/jekyll.js");

const STYLES_MAIN: &str = include_str!("../../templates/styles/main.scss.hbs");
const STYLES_VARIABLES: &str = include_str!("../../templates/styles/variables.scss");
const STYLES_SCREEN: &str = include_str!("../../templates/styles/screen.scss.hbs");

const SCRIPT_MAIN: &str = include_str!("../../templates/scripts/main.js.hbs");
const SCRIPT_JQUERY: &str = include_str!("../../templates/scripts/jquery.init.js");
const SCRIPT_BOOTSTRAP: &str = include_str!("../../templates/scripts/bootstrap.js");
const SCRIPT_FOUNDATION: &str = include_str!("../../templates/scripts/foundation.js");

const SCREEN_HTML: &str = include_str!("../../templates/markup/screen.html.hbs");
const SCREEN_PUG: &str = include_str!("../../templates/markup/screen.pug.hbs");
const PUG_LAYOUT: &str = include_str!("../../templates/markup/layout.pug.hbs");
const PUG_HEAD: &str = include_str!("../../templates/markup/includes/head.pug.hbs");
const PUG_FOOT: &str = include_str!("../../templates/markup/includes/foot.pug.hbs");

const JEKYLL_CONFIG: &str = include_str!("../../templates/jekyll/config.yml.hbs");
const JEKYLL_GEMFILE: &str = include_str!("../../templates/jekyll/Gemfile");
const JEKYLL_SCREEN: &str = include_str!("../../templates/jekyll/screen.html.hbs");
const JEKYLL_HEAD: &str = include_str!("../../templates/jekyll/includes/head.html.hbs");
const JEKYLL_FOOT: &str = include_str!("../../templates/jekyll/includes/foot.html.hbs");
const JEKYLL_LAYOUT: &str = include_str!("../../templates/jekyll/layouts/default.html.hbs");

const KEEP: &str = include_str!("../../templates/misc/gitkeep");

/// Source text for a template id
pub fn content(id: TemplateId) -> &'static str {
    match id {
        TemplateId::PackageManifest => PACKAGE_MANIFEST,
        TemplateId::EditorConfig => EDITOR_CONFIG,
        TemplateId::EslintRc => ESLINT_RC,
        TemplateId::License => LICENSE,
        TemplateId::GitIgnore => GIT_IGNORE,
        TemplateId::GitAttributes => GIT_ATTRIBUTES,
        TemplateId::Gulpfile => GULPFILE,
        TemplateId::GulpConfig => GULP_CONFIG,
        TemplateId::GulpClean => GULP_CLEAN,
        TemplateId::GulpStatic => GULP_STATIC,
        TemplateId::GulpStyles => GULP_STYLES,
        TemplateId::GulpScripts => GULP_SCRIPTS,
        TemplateId::GulpMarkup => GULP_MARKUP,
        TemplateId::GulpServe => GULP_SERVE,
        TemplateId::GulpJekyll => GULP_JEKYLL,
        TemplateId::StylesMain => STYLES_MAIN,
        TemplateId::StylesVariables => STYLES_VARIABLES,
        TemplateId::StylesScreen => STYLES_SCREEN,
        TemplateId::ScriptMain => SCRIPT_MAIN,
        TemplateId::ScriptJquery => SCRIPT_JQUERY,
        TemplateId::ScriptBootstrap => SCRIPT_BOOTSTRAP,
        TemplateId::ScriptFoundation => SCRIPT_FOUNDATION,
        TemplateId::ScreenHtml => SCREEN_HTML,
        TemplateId::ScreenPug => SCREEN_PUG,
        TemplateId::PugLayout => PUG_LAYOUT,
        TemplateId::PugHead => PUG_HEAD,
        TemplateId::PugFoot => PUG_FOOT,
        TemplateId::JekyllConfig => JEKYLL_CONFIG,
        TemplateId::JekyllGemfile => JEKYLL_GEMFILE,
        TemplateId::JekyllScreen => JEKYLL_SCREEN,
        TemplateId::JekyllHead => JEKYLL_HEAD,
        TemplateId::JekyllFoot => JEKYLL_FOOT,
        TemplateId::JekyllLayout => JEKYLL_LAYOUT,
        TemplateId::Keep => KEEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_templates_carry_variables() {
        assert!(content(TemplateId::PackageManifest).contains("{{project_name}}"));
        assert!(content(TemplateId::ScreenHtml).contains("{{screen_index}}"));
        assert!(content(TemplateId::Gulpfile).contains("{{#if is_jekyll}}"));
        assert!(content(TemplateId::StylesMain).contains("{{#if is_bootstrap}}"));
    }

    #[test]
    fn test_verbatim_templates_are_plain() {
        for id in [
            TemplateId::EditorConfig,
            TemplateId::GitIgnore,
            TemplateId::GitAttributes,
            TemplateId::GulpClean,
            TemplateId::JekyllGemfile,
        ] {
            assert!(!content(id).contains("{{"), "{} should not carry variables", id.name());
        }
    }

    #[test]
    fn test_keep_placeholder_is_empty() {
        assert!(content(TemplateId::Keep).trim().is_empty());
    }
}
