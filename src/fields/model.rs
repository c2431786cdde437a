//! Field definition types.

use crate::environment::ResolvedEnvironment;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock};

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]+").expect("Invalid non-alphanumeric regex"));

/// A resolved or default value.
///
/// Flags render as `true` / `false` in the generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Flag(bool),
    Text(String),
}

impl Value {
    /// String form written to the environment file.
    pub fn render(&self) -> String {
        match self {
            Value::Flag(true) => "true".to_string(),
            Value::Flag(false) => "false".to_string(),
            Value::Text(text) => text.clone(),
        }
    }

    /// Interpret the value as a yes/no answer.
    pub fn as_flag(&self) -> bool {
        match self {
            Value::Flag(flag) => *flag,
            Value::Text(text) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "1" | "y" | "yes" | "true" | "on"
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Flag(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

/// How a field is asked for in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Free text with a default.
    Ask,
    /// Yes/no question producing a flag.
    AskConfirmation,
    /// Free text that must not be blank.
    AskAndValidate,
    /// Non-echoed text that must not be blank.
    AskAndHideAnswer,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionType::Ask => "ask",
            QuestionType::AskConfirmation => "ask_confirmation",
            QuestionType::AskAndValidate => "ask_and_validate",
            QuestionType::AskAndHideAnswer => "ask_and_hide_answer",
        };
        f.write_str(name)
    }
}

/// Read-only view handed to computed defaults.
pub struct DefaultContext<'a> {
    base_dir: &'a Path,
    resolved: &'a ResolvedEnvironment,
}

impl<'a> DefaultContext<'a> {
    pub fn new(base_dir: &'a Path, resolved: &'a ResolvedEnvironment) -> Self {
        Self { base_dir, resolved }
    }

    /// Final component of the project directory.
    pub fn dir_name(&self) -> String {
        self.base_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory name with runs of non-alphanumerics replaced by `_`.
    pub fn dir_slug(&self) -> String {
        strip_non_alphanumerics(&self.dir_name())
    }

    /// Value of a field resolved earlier in this run.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.resolved.get(key)
    }

    /// Rendered value of an earlier field, or `""` if it has none.
    pub fn get_text(&self, key: &str) -> String {
        self.get(key).map(Value::render).unwrap_or_default()
    }
}

/// Replace every run of characters outside `[a-zA-Z0-9_]` with a single `_`.
pub fn strip_non_alphanumerics(input: &str) -> String {
    NON_ALPHANUMERIC.replace_all(input, "_").into_owned()
}

pub type ComputeFn = dyn Fn(&DefaultContext<'_>) -> Value + Send + Sync;

/// Invoked after a field's value is stored; may read and set other keys.
pub type AfterHook = Arc<dyn Fn(&mut ResolvedEnvironment) + Send + Sync>;

/// Default value of a field: a literal, or computed when the field is reached.
#[derive(Clone)]
pub enum DefaultValue {
    Literal(Value),
    Computed(Arc<ComputeFn>),
}

impl DefaultValue {
    pub fn literal(value: impl Into<Value>) -> Self {
        DefaultValue::Literal(value.into())
    }

    pub fn computed<F>(compute: F) -> Self
    where
        F: Fn(&DefaultContext<'_>) -> Value + Send + Sync + 'static,
    {
        DefaultValue::Computed(Arc::new(compute))
    }

    /// Produce the default for the current point of resolution.
    pub fn evaluate(&self, ctx: &DefaultContext<'_>) -> Value {
        match self {
            DefaultValue::Literal(value) => value.clone(),
            DefaultValue::Computed(compute) => compute(ctx),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            DefaultValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Dependency on an earlier field: prompt only when `key` resolved to `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requires {
    pub key: String,
    pub value: Value,
}

impl Requires {
    /// Whether the dependency holds against the values resolved so far.
    pub fn is_met(&self, resolved: &ResolvedEnvironment) -> bool {
        resolved.get(&self.key) == Some(&self.value)
    }
}

/// One entry of the field table.
#[derive(Clone)]
pub struct FieldDefinition {
    /// Output variable name.
    pub key: String,
    pub question_type: QuestionType,
    /// Question text shown in interactive mode, without the default hint.
    pub question: String,
    pub default: DefaultValue,
    pub requires: Option<Requires>,
    pub after_resolve: Option<AfterHook>,
    /// Grouping header that is removed from the output.
    pub section_mark: bool,
    /// Replaces the generic message when a blank answer is rejected.
    pub error_message: Option<String>,
}

impl FieldDefinition {
    pub fn new(
        key: impl Into<String>,
        question_type: QuestionType,
        question: impl Into<String>,
        default: DefaultValue,
    ) -> Self {
        Self {
            key: key.into(),
            question_type,
            question: question.into(),
            default,
            requires: None,
            after_resolve: None,
            section_mark: false,
            error_message: None,
        }
    }

    pub fn requires(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.requires = Some(Requires {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn after_resolve<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut ResolvedEnvironment) + Send + Sync + 'static,
    {
        self.after_resolve = Some(Arc::new(hook));
        self
    }

    pub fn section_mark(mut self) -> Self {
        self.section_mark = true;
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("key", &self.key)
            .field("question_type", &self.question_type)
            .field("question", &self.question)
            .field("default", &self.default)
            .field("requires", &self.requires)
            .field("after_resolve", &self.after_resolve.as_ref().map(|_| ".."))
            .field("section_mark", &self.section_mark)
            .field("error_message", &self.error_message)
            .finish()
    }
}
