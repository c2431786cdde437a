//! Field resolution.
//!
//! Walks the field table in declaration order and produces a
//! [`ResolvedEnvironment`]. Each field goes through the same steps:
//!
//! 1. Evaluate its default (computed defaults see earlier values)
//! 2. If its `requires` is unmet, or it is a salt key, store the default
//!    without prompting
//! 3. Otherwise store the default (non-interactive) or the operator's answer
//! 4. Run its after hook
//! 5. Remember section markers, which are removed once the pass is done

mod target;
mod validate;


pub use target::{DEFAULT_FILENAME, Target, resolve_target_path, select_target};
pub use validate::{GENERIC_EMPTY_MESSAGE, not_empty, valid_filename};

use crate::environment::ResolvedEnvironment;
use crate::error::Result;
use crate::fields::{DefaultContext, FieldDefinition, FieldTable, QuestionType, Value};
use crate::prompt::Prompter;
use std::path::Path;

/// Retry budget for validated questions.
pub const VALIDATION_ATTEMPTS: u32 = 3;

/// Resolution strategy for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompt the operator for each field.
    Interactive,
    /// Use defaults everywhere; never prompt.
    NonInteractive,
}

impl Mode {
    pub fn detect(prompter: &dyn Prompter) -> Self {
        if prompter.is_interactive() {
            Mode::Interactive
        } else {
            Mode::NonInteractive
        }
    }
}

/// Resolves one field table against one project directory.
pub struct Resolver<'a> {
    table: &'a FieldTable,
    base_dir: &'a Path,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a FieldTable, base_dir: &'a Path) -> Self {
        Self { table, base_dir }
    }

    /// Resolve every field, asking through `prompter` when it is interactive.
    pub fn resolve(&self, prompter: &mut dyn Prompter) -> Result<ResolvedEnvironment> {
        let mode = Mode::detect(prompter);
        let mut env = ResolvedEnvironment::new();
        let mut section_marks: Vec<&str> = Vec::new();

        tracing::debug!(?mode, fields = self.table.len(), "resolving field table");

        for field in self.table.fields() {
            let default = field
                .default
                .evaluate(&DefaultContext::new(self.base_dir, &env));

            let requirement_unmet = field
                .requires
                .as_ref()
                .is_some_and(|requires| !requires.is_met(&env));

            let value = if requirement_unmet {
                tracing::debug!(key = %field.key, "requirement unmet, using default");
                default
            } else if self.table.is_salt_key(&field.key) || mode == Mode::NonInteractive {
                default
            } else {
                ask_field(prompter, field, default)?
            };

            env.set(field.key.clone(), value);

            if let Some(hook) = &field.after_resolve {
                hook(&mut env);
            }

            if field.section_mark {
                section_marks.push(&field.key);
            }
        }

        for key in section_marks {
            env.remove(key);
        }

        Ok(env)
    }
}

/// Format the question with its default hint, e.g. `Database host [localhost]: `.
pub fn question_with_hint(question: &str, hint: &str) -> String {
    format!("{} [{}]: ", question, hint)
}

fn ask_field(
    prompter: &mut dyn Prompter,
    field: &FieldDefinition,
    default: Value,
) -> Result<Value> {
    match field.question_type {
        QuestionType::AskConfirmation => {
            let default = default.as_flag();
            let hint = if default { "Y,n" } else { "y,N" };
            let question = question_with_hint(&field.question, hint);
            Ok(Value::Flag(prompter.ask_confirmation(&question, default)?))
        }
        QuestionType::Ask => {
            let default = default.render();
            let question = question_with_hint(&field.question, &default);
            Ok(Value::Text(prompter.ask(&question, &default)?))
        }
        QuestionType::AskAndValidate => {
            let default = default.render();
            let question = question_with_hint(&field.question, &default);
            let validator = not_empty(field.error_message.as_deref());
            let answer = prompter.ask_and_validate(
                &question,
                &validator,
                Some(VALIDATION_ATTEMPTS),
                &default,
            )?;
            Ok(Value::Text(answer))
        }
        QuestionType::AskAndHideAnswer => {
            let default = default.render();
            let question = question_with_hint(&field.question, &default);
            let validator = not_empty(field.error_message.as_deref());
            let answer = prompter.ask_and_hide_answer(
                &question,
                &validator,
                Some(VALIDATION_ATTEMPTS),
                &default,
            )?;
            Ok(Value::Text(answer))
        }
    }
}
