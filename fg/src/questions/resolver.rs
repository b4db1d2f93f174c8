//! Resolution pass
//!
//! Walks the question list once, in declared order:
//! 1. effective prior value = CLI override, else saved-settings value;
//! 2. a prior value answers the question silently but is still coerced and
//!    validated (fatal on violation, there is no one to re-prompt);
//! 3. with no prior value, a false `when` predicate leaves the key on its
//!    declared default;
//! 4. otherwise the question is asked, re-prompting on invalid input;
//! 5. the answer is recorded so later `when` predicates can read it.

use std::collections::BTreeMap;

use colored::*;
use eyre::Result;
use tracing::{debug, info};

use crate::config::{Answer, Configuration, Draft};
use crate::error::GenError;
use crate::questions::definitions::{Question, QuestionKind, questions};
use crate::questions::prompter::Prompter;

/// Produce a fully resolved configuration
///
/// `overrides` are CLI-supplied values, `saved` comes from the settings
/// store; overrides take precedence. Returns
/// [`GenError::Incomplete`](crate::error::GenError) if a required key is
/// still unresolved after the pass.
pub fn resolve(
    prompter: &dyn Prompter,
    overrides: &BTreeMap<String, Answer>,
    saved: &BTreeMap<String, Answer>,
) -> Result<Configuration> {
    let mut draft = Draft::default();

    for question in questions() {
        if let Some(prior) = overrides.get(question.key).or_else(|| saved.get(question.key)) {
            debug!(key = %question.key, ?prior, "resolve: binding prior value");
            draft.bind(question.key, prior)?;
            continue;
        }

        if let Some(when) = question.when {
            if !when(&draft) {
                debug!(key = %question.key, "resolve: skipped by when predicate");
                continue;
            }
        }

        ask(prompter, question, &mut draft)?;
    }

    let config = draft.finish()?;
    info!(?config, "Configuration resolved");
    Ok(config)
}

/// Ask one question, re-prompting until the answer passes validation
fn ask(prompter: &dyn Prompter, question: &Question, draft: &mut Draft) -> Result<()> {
    loop {
        let answer = match question.kind {
            QuestionKind::Input => Answer::Str(prompter.input(question.message)?),
            QuestionKind::Select { choices } => {
                let items: Vec<&str> = choices.iter().map(|c| c.label).collect();
                let index = prompter.select(question.message, &items, 0)?;
                Answer::Str(choices[index].value.to_string())
            }
            QuestionKind::Confirm { default } => Answer::Bool(prompter.confirm(question.message, default)?),
        };

        match draft.bind(question.key, &answer) {
            Ok(()) => return Ok(()),
            Err(err @ GenError::Validation { .. }) => {
                debug!(key = %question.key, %err, "ask: invalid answer, re-prompting");
                println!("{}", err.to_string().red());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FrontEndFramework, KEY_FRONT_END_FRAMEWORK, KEY_JQUERY, KEY_MARKUP_LANGUAGE, KEY_PROJECT_NAME,
        KEY_QTY_SCREENS, MarkupIntegration, MarkupLanguage,
    };
    use crate::questions::prompter::{ScriptedAnswer, ScriptedPrompter};

    fn full_overrides() -> BTreeMap<String, Answer> {
        let mut map = BTreeMap::new();
        map.insert(KEY_PROJECT_NAME.to_string(), Answer::Str("Acme".to_string()));
        map.insert(KEY_QTY_SCREENS.to_string(), Answer::Str("2".to_string()));
        map.insert(KEY_MARKUP_LANGUAGE.to_string(), Answer::Str("html".to_string()));
        map.insert("markupIntegration".to_string(), Answer::Str("false".to_string()));
        map.insert(KEY_FRONT_END_FRAMEWORK.to_string(), Answer::Str("bootstrap".to_string()));
        map.insert(KEY_JQUERY.to_string(), Answer::Bool(false));
        map
    }

    #[test]
    fn test_fully_supplied_run_asks_nothing() {
        let prompter = ScriptedPrompter::default();
        let config = resolve(&prompter, &full_overrides(), &BTreeMap::new()).unwrap();

        assert!(prompter.asked().is_empty());
        assert_eq!(config.project_name, "Acme");
        assert_eq!(config.qty_screens, 2);
        assert_eq!(config.markup_language, MarkupLanguage::Html);
        assert_eq!(config.markup_integration, MarkupIntegration::None);
        assert_eq!(config.front_end_framework, FrontEndFramework::Bootstrap);
        assert!(!config.jquery);
    }

    #[test]
    fn test_interactive_run_asks_in_declared_order() {
        let prompter = ScriptedPrompter::new([
            ScriptedAnswer::Text("Acme".to_string()),
            ScriptedAnswer::Text("3".to_string()),
            ScriptedAnswer::Index(1),  // pug
            ScriptedAnswer::Index(0),  // no integration
            ScriptedAnswer::Index(0),  // no framework
            ScriptedAnswer::Flag(true),
        ]);
        let config = resolve(&prompter, &BTreeMap::new(), &BTreeMap::new()).unwrap();

        assert_eq!(prompter.asked().len(), 6);
        assert_eq!(config.qty_screens, 3);
        assert_eq!(config.markup_language, MarkupLanguage::Pug);
        assert!(config.jquery);
    }

    #[test]
    fn test_framework_choice_suppresses_jquery_question() {
        let prompter = ScriptedPrompter::new([
            ScriptedAnswer::Text("Acme".to_string()),
            ScriptedAnswer::Text("1".to_string()),
            ScriptedAnswer::Index(0), // html
            ScriptedAnswer::Index(0), // no integration
            ScriptedAnswer::Index(1), // bootstrap
        ]);
        let config = resolve(&prompter, &BTreeMap::new(), &BTreeMap::new()).unwrap();

        let asked = prompter.asked();
        assert_eq!(asked.len(), 5, "jQuery question must not be shown: {:?}", asked);
        assert_eq!(config.front_end_framework, FrontEndFramework::Bootstrap);
        assert!(!config.jquery, "jQuery falls back to its default");
    }

    #[test]
    fn test_jquery_override_wins_over_framework_gate() {
        let mut overrides = full_overrides();
        overrides.insert(KEY_JQUERY.to_string(), Answer::Bool(true));
        let prompter = ScriptedPrompter::default();
        let config = resolve(&prompter, &overrides, &BTreeMap::new()).unwrap();
        assert!(config.jquery);
    }

    #[test]
    fn test_invalid_prior_value_is_fatal() {
        let mut overrides = full_overrides();
        overrides.insert(KEY_QTY_SCREENS.to_string(), Answer::Str("abc".to_string()));
        let prompter = ScriptedPrompter::default();
        let err = resolve(&prompter, &overrides, &BTreeMap::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenError>(),
            Some(GenError::Validation { key, .. }) if key == KEY_QTY_SCREENS
        ));
        assert!(prompter.asked().is_empty(), "no re-prompt for prior values");
    }

    #[test]
    fn test_invalid_interactive_answer_reprompts() {
        let prompter = ScriptedPrompter::new([
            ScriptedAnswer::Text("Acme".to_string()),
            ScriptedAnswer::Text("zero".to_string()), // rejected
            ScriptedAnswer::Text("0".to_string()),    // rejected
            ScriptedAnswer::Text("4".to_string()),    // accepted
            ScriptedAnswer::Index(0),
            ScriptedAnswer::Index(0),
            ScriptedAnswer::Index(0),
            ScriptedAnswer::Flag(false),
        ]);
        let config = resolve(&prompter, &BTreeMap::new(), &BTreeMap::new()).unwrap();
        assert_eq!(config.qty_screens, 4);
        assert_eq!(prompter.asked().len(), 8);
    }

    #[test]
    fn test_cli_override_beats_saved_value() {
        let mut saved = full_overrides();
        saved.insert(KEY_PROJECT_NAME.to_string(), Answer::Str("Old".to_string()));
        let mut overrides = BTreeMap::new();
        overrides.insert(KEY_PROJECT_NAME.to_string(), Answer::Str("New".to_string()));

        let prompter = ScriptedPrompter::default();
        let config = resolve(&prompter, &overrides, &saved).unwrap();
        assert_eq!(config.project_name, "New");
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_saved_settings_make_rerun_silent() {
        // Round-trip: resolve once, persist the answers, resolve again
        let prompter = ScriptedPrompter::default();
        let first = resolve(&prompter, &full_overrides(), &BTreeMap::new()).unwrap();

        let saved: BTreeMap<String, Answer> = first
            .to_answers()
            .iter()
            .map(|(k, v)| (k.clone(), Answer::from_json(v).unwrap()))
            .collect();

        let second = resolve(&prompter, &BTreeMap::new(), &saved).unwrap();
        assert_eq!(first, second);
        assert!(prompter.asked().is_empty());
    }
}
