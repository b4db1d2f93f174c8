//! The question list
//!
//! Declared in the order the questions are asked. The jQuery question is
//! gated on no CSS framework having resolved truthy: frameworks are assumed
//! to bring their own script needs, so the question would be redundant.

use crate::config::{
    Draft, KEY_FRONT_END_FRAMEWORK, KEY_JQUERY, KEY_MARKUP_INTEGRATION, KEY_MARKUP_LANGUAGE, KEY_PROJECT_NAME,
    KEY_QTY_SCREENS,
};

/// One selectable option of a Select question
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    /// Label shown in the prompt
    pub label: &'static str,
    /// Wire value bound to the key when chosen
    pub value: &'static str,
}

/// Input kind of a question
#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    /// Free text
    Input,
    /// Single choice from a fixed set
    Select { choices: &'static [Choice] },
    /// Yes/no with a default
    Confirm { default: bool },
}

/// A declarative question definition
pub struct Question {
    /// Option key this question resolves
    pub key: &'static str,
    /// Prompt text
    pub message: &'static str,
    /// Input kind
    pub kind: QuestionKind,
    /// Skip predicate over the draft resolved so far; `false` means the key
    /// keeps its declared default and the question is never asked
    pub when: Option<fn(&Draft) -> bool>,
}

const MARKUP_LANGUAGES: &[Choice] = &[
    Choice { label: "HTML", value: "html" },
    Choice { label: "Pug", value: "pug" },
];

const MARKUP_INTEGRATIONS: &[Choice] = &[
    Choice { label: "None, plain files", value: "false" },
    Choice { label: "Jekyll", value: "jekyll" },
];

const FRAMEWORKS: &[Choice] = &[
    Choice { label: "None", value: "false" },
    Choice { label: "Bootstrap", value: "bootstrap" },
    Choice { label: "Foundation", value: "foundation" },
];

fn no_framework_chosen(draft: &Draft) -> bool {
    !draft.front_end_framework.map(|f| f.is_some()).unwrap_or(false)
}

/// The fixed, ordered question list
pub fn questions() -> &'static [Question] {
    &[
        Question {
            key: KEY_PROJECT_NAME,
            message: "Give me the project name!",
            kind: QuestionKind::Input,
            when: None,
        },
        Question {
            key: KEY_QTY_SCREENS,
            message: "How many screens will you code?",
            kind: QuestionKind::Input,
            when: None,
        },
        Question {
            key: KEY_MARKUP_LANGUAGE,
            message: "What markup language do you want to use?",
            kind: QuestionKind::Select {
                choices: MARKUP_LANGUAGES,
            },
            when: None,
        },
        Question {
            key: KEY_MARKUP_INTEGRATION,
            message: "Any markup integration?",
            kind: QuestionKind::Select {
                choices: MARKUP_INTEGRATIONS,
            },
            when: None,
        },
        Question {
            key: KEY_FRONT_END_FRAMEWORK,
            message: "What CSS framework would you like to include?",
            kind: QuestionKind::Select { choices: FRAMEWORKS },
            when: None,
        },
        Question {
            key: KEY_JQUERY,
            message: "Would you like to use jQuery?",
            kind: QuestionKind::Confirm { default: false },
            when: Some(no_framework_chosen),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ALL_KEYS, FrontEndFramework};

    #[test]
    fn test_question_order_matches_key_order() {
        let keys: Vec<&str> = questions().iter().map(|q| q.key).collect();
        assert_eq!(keys, ALL_KEYS);
    }

    #[test]
    fn test_jquery_gate() {
        let gate = questions().last().unwrap().when.unwrap();

        let mut draft = Draft::default();
        assert!(gate(&draft), "asked while no framework is resolved");

        draft.front_end_framework = Some(FrontEndFramework::None);
        assert!(gate(&draft), "asked when framework resolved to none");

        draft.front_end_framework = Some(FrontEndFramework::Bootstrap);
        assert!(!gate(&draft), "skipped when a framework resolved truthy");
    }
}
