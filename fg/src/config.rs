//! Configuration types and domain coercion
//!
//! The six option keys drive the whole generation. Prior values (CLI options,
//! saved settings) arrive untyped as [`Answer`]s and are coerced per key into
//! the typed [`Draft`]; the fully resolved [`Configuration`] is what the
//! planner consumes. The wire spellings (camelCase keys, `false` for the
//! absent enum cases) match what previous generator releases persisted.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::GenError;

/// Option keys, camelCase wire form
pub const KEY_PROJECT_NAME: &str = "projectName";
pub const KEY_QTY_SCREENS: &str = "qtyScreens";
pub const KEY_MARKUP_LANGUAGE: &str = "markupLanguage";
pub const KEY_MARKUP_INTEGRATION: &str = "markupIntegration";
pub const KEY_FRONT_END_FRAMEWORK: &str = "frontEndFramework";
pub const KEY_JQUERY: &str = "jQuery";

/// All option keys, in prompt order
pub const ALL_KEYS: [&str; 6] = [
    KEY_PROJECT_NAME,
    KEY_QTY_SCREENS,
    KEY_MARKUP_LANGUAGE,
    KEY_MARKUP_INTEGRATION,
    KEY_FRONT_END_FRAMEWORK,
    KEY_JQUERY,
];

/// Markup language for the plain per-screen templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupLanguage {
    Html,
    Pug,
}

impl MarkupLanguage {
    /// File extension of the screen templates
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pug => "pug",
        }
    }
}

impl FromStr for MarkupLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "pug" => Ok(Self::Pug),
            _ => Err(format!("expected one of: html, pug; got \"{}\"", s)),
        }
    }
}

impl fmt::Display for MarkupLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Markup integration replacing the plain screen templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupIntegration {
    /// Plain markup files, no site generator
    #[default]
    None,
    /// Jekyll site tree (its screen templates replace the plain ones)
    Jekyll,
}

impl MarkupIntegration {
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Wire value as persisted by previous generator releases
    pub fn wire_value(&self) -> Value {
        match self {
            Self::None => Value::from(false),
            Self::Jekyll => Value::from("jekyll"),
        }
    }
}

impl FromStr for MarkupIntegration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jekyll" => Ok(Self::Jekyll),
            "false" | "none" => Ok(Self::None),
            _ => Err(format!("expected one of: false, jekyll; got \"{}\"", s)),
        }
    }
}

impl fmt::Display for MarkupIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("false"),
            Self::Jekyll => f.write_str("jekyll"),
        }
    }
}

/// Optional CSS framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontEndFramework {
    #[default]
    None,
    Bootstrap,
    Foundation,
}

impl FrontEndFramework {
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Wire value as persisted by previous generator releases
    pub fn wire_value(&self) -> Value {
        match self {
            Self::None => Value::from(false),
            Self::Bootstrap => Value::from("bootstrap"),
            Self::Foundation => Value::from("foundation"),
        }
    }
}

impl FromStr for FrontEndFramework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bootstrap" => Ok(Self::Bootstrap),
            "foundation" => Ok(Self::Foundation),
            "false" | "none" => Ok(Self::None),
            _ => Err(format!("expected one of: false, bootstrap, foundation; got \"{}\"", s)),
        }
    }
}

impl fmt::Display for FrontEndFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("false"),
            Self::Bootstrap => f.write_str("bootstrap"),
            Self::Foundation => f.write_str("foundation"),
        }
    }
}

/// An untyped prior value, before per-key coercion
///
/// CLI options arrive as strings, saved settings as JSON scalars; both are
/// funneled through the same coercion so `--qty-screens 3` and a persisted
/// `"qtyScreens": "3"` behave identically.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Answer {
    /// Convert a JSON scalar from the settings document; non-scalars are dropped
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::Bool(b) => Some(Self::Bool(*b)),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// The partially-resolved configuration threaded through prompt resolution
///
/// `when` predicates of later questions read earlier bindings from here.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub project_name: Option<String>,
    pub qty_screens: Option<u32>,
    pub markup_language: Option<MarkupLanguage>,
    pub markup_integration: Option<MarkupIntegration>,
    pub front_end_framework: Option<FrontEndFramework>,
    pub jquery: Option<bool>,
}

impl Draft {
    /// Coerce, validate and bind a value for the given key
    pub fn bind(&mut self, key: &str, answer: &Answer) -> Result<(), GenError> {
        debug!(%key, ?answer, "Draft::bind");
        match key {
            KEY_PROJECT_NAME => {
                let Answer::Str(s) = answer else {
                    return Err(GenError::validation(key, answer, "expected a string"));
                };
                let s = s.trim();
                if s.is_empty() {
                    return Err(GenError::validation(key, answer, "must not be empty"));
                }
                self.project_name = Some(s.to_string());
            }
            KEY_QTY_SCREENS => {
                let n = match answer {
                    Answer::Int(i) => *i,
                    Answer::Str(s) => s
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| GenError::validation(key, answer, "expected a positive integer"))?,
                    Answer::Bool(_) => {
                        return Err(GenError::validation(key, answer, "expected a positive integer"));
                    }
                };
                if n < 1 {
                    return Err(GenError::validation(key, answer, "must be at least 1"));
                }
                let n = u32::try_from(n).map_err(|_| GenError::validation(key, answer, "out of range"))?;
                self.qty_screens = Some(n);
            }
            KEY_MARKUP_LANGUAGE => {
                let Answer::Str(s) = answer else {
                    return Err(GenError::validation(key, answer, "expected one of: html, pug"));
                };
                self.markup_language = Some(s.parse().map_err(|e: String| GenError::validation(key, answer, e))?);
            }
            KEY_MARKUP_INTEGRATION => {
                self.markup_integration = Some(match answer {
                    Answer::Bool(false) => MarkupIntegration::None,
                    Answer::Str(s) => s.parse().map_err(|e: String| GenError::validation(key, answer, e))?,
                    _ => return Err(GenError::validation(key, answer, "expected one of: false, jekyll")),
                });
            }
            KEY_FRONT_END_FRAMEWORK => {
                self.front_end_framework = Some(match answer {
                    Answer::Bool(false) => FrontEndFramework::None,
                    Answer::Str(s) => s.parse().map_err(|e: String| GenError::validation(key, answer, e))?,
                    _ => {
                        return Err(GenError::validation(
                            key,
                            answer,
                            "expected one of: false, bootstrap, foundation",
                        ));
                    }
                });
            }
            KEY_JQUERY => {
                self.jquery = Some(match answer {
                    Answer::Bool(b) => *b,
                    Answer::Str(s) => match s.to_lowercase().as_str() {
                        "true" | "yes" => true,
                        "false" | "no" => false,
                        _ => return Err(GenError::validation(key, answer, "expected true or false")),
                    },
                    Answer::Int(_) => return Err(GenError::validation(key, answer, "expected true or false")),
                });
            }
            _ => {
                return Err(GenError::validation(key, answer, "unknown option"));
            }
        }
        Ok(())
    }

    /// Finish resolution: apply declared defaults, fail on missing required keys
    pub fn finish(self) -> Result<Configuration, GenError> {
        let project_name = self.project_name.ok_or_else(|| GenError::Incomplete {
            key: KEY_PROJECT_NAME.to_string(),
        })?;
        let markup_language = self.markup_language.ok_or_else(|| GenError::Incomplete {
            key: KEY_MARKUP_LANGUAGE.to_string(),
        })?;

        Ok(Configuration {
            project_name,
            qty_screens: self.qty_screens.unwrap_or(1),
            markup_language,
            markup_integration: self.markup_integration.unwrap_or_default(),
            front_end_framework: self.front_end_framework.unwrap_or_default(),
            jquery: self.jquery.unwrap_or(false),
        })
    }
}

/// The fully resolved configuration driving the planner
///
/// Created once per run, consumed read-only by the planner, persisted back to
/// the settings store at end of run.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub project_name: String,
    pub qty_screens: u32,
    pub markup_language: MarkupLanguage,
    pub markup_integration: MarkupIntegration,
    pub front_end_framework: FrontEndFramework,
    pub jquery: bool,
}

impl Configuration {
    /// Wire-form answer map for the settings document
    pub fn to_answers(&self) -> BTreeMap<String, Value> {
        let mut answers = BTreeMap::new();
        answers.insert(KEY_PROJECT_NAME.to_string(), Value::from(self.project_name.clone()));
        answers.insert(KEY_QTY_SCREENS.to_string(), Value::from(self.qty_screens));
        answers.insert(
            KEY_MARKUP_LANGUAGE.to_string(),
            Value::from(self.markup_language.to_string()),
        );
        answers.insert(KEY_MARKUP_INTEGRATION.to_string(), self.markup_integration.wire_value());
        answers.insert(
            KEY_FRONT_END_FRAMEWORK.to_string(),
            self.front_end_framework.wire_value(),
        );
        answers.insert(KEY_JQUERY.to_string(), Value::from(self.jquery));
        answers
    }
}
