//! Interactive I/O seam.
//!
//! The resolver never touches the terminal directly; it talks to a
//! [`Prompter`]. [`TerminalPrompter`] is the real implementation backed by
//! dialoguer, [`NonInteractivePrompter`] is used for CI and piped installs.

mod non_interactive;
mod terminal;

pub use non_interactive::NonInteractivePrompter;
pub use terminal::TerminalPrompter;

use crate::error::{EnvError, Result};

/// Checks an answer, returning the value to store or a message for the operator.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<String, String>;

/// Prompt primitives the resolver relies on.
pub trait Prompter {
    /// Whether a human operator can answer questions.
    fn is_interactive(&self) -> bool;

    /// Ask a free-text question. Empty input yields `default`.
    fn ask(&mut self, question: &str, default: &str) -> Result<String>;

    /// Ask a yes/no question. Empty input yields `default`.
    fn ask_confirmation(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Ask until `validator` accepts the answer (empty input yields `default`).
    ///
    /// `attempts` of `None` retries forever; exhausting a budget is a
    /// [`EnvError::ValidationError`].
    fn ask_and_validate(
        &mut self,
        question: &str,
        validator: Validator<'_>,
        attempts: Option<u32>,
        default: &str,
    ) -> Result<String>;

    /// Like [`Prompter::ask_and_validate`] without echoing the input.
    fn ask_and_hide_answer(
        &mut self,
        question: &str,
        validator: Validator<'_>,
        attempts: Option<u32>,
        default: &str,
    ) -> Result<String>;

    /// Print a line to the operator.
    fn write(&mut self, text: &str);
}

/// Shared retry loop for validated questions.
///
/// `read` produces one raw answer per call; each rejection is reported
/// through `report` and consumes one attempt.
pub fn retry_validated<R, W>(
    mut read: R,
    mut report: W,
    validator: Validator<'_>,
    attempts: Option<u32>,
    default: &str,
) -> Result<String>
where
    R: FnMut() -> Result<String>,
    W: FnMut(&str),
{
    let mut remaining = attempts;

    loop {
        let raw = read()?;
        let answer = if raw.is_empty() { default } else { raw.as_str() };

        match validator(answer) {
            Ok(value) => return Ok(value),
            Err(message) => {
                report(&message);
                if let Some(left) = remaining.as_mut() {
                    *left = left.saturating_sub(1);
                    if *left == 0 {
                        return Err(EnvError::ValidationError(message));
                    }
                }
            }
        }
    }
}
