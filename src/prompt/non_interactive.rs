//! Prompter for runs without an operator.

use super::{Prompter, Validator};
use crate::error::{EnvError, Result};

/// Never asks anything; output goes to stdout.
#[derive(Debug, Default)]
pub struct NonInteractivePrompter;

impl NonInteractivePrompter {
    pub fn new() -> Self {
        Self
    }
}

fn unavailable(question: &str) -> EnvError {
    EnvError::PromptError(format!(
        "cannot ask '{}' without an interactive terminal",
        question.trim()
    ))
}

impl Prompter for NonInteractivePrompter {
    fn is_interactive(&self) -> bool {
        false
    }

    fn ask(&mut self, question: &str, _default: &str) -> Result<String> {
        Err(unavailable(question))
    }

    fn ask_confirmation(&mut self, question: &str, _default: bool) -> Result<bool> {
        Err(unavailable(question))
    }

    fn ask_and_validate(
        &mut self,
        question: &str,
        _validator: Validator<'_>,
        _attempts: Option<u32>,
        _default: &str,
    ) -> Result<String> {
        Err(unavailable(question))
    }

    fn ask_and_hide_answer(
        &mut self,
        question: &str,
        _validator: Validator<'_>,
        _attempts: Option<u32>,
        _default: &str,
    ) -> Result<String> {
        Err(unavailable(question))
    }

    fn write(&mut self, text: &str) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_is_refused() {
        let mut prompter = NonInteractivePrompter::new();
        let accept = |v: &str| -> std::result::Result<String, String> { Ok(v.to_string()) };

        assert!(!prompter.is_interactive());
        assert!(matches!(prompter.ask("Q", "d"), Err(EnvError::PromptError(_))));
        assert!(prompter.ask_confirmation("Q", true).is_err());
        assert!(prompter.ask_and_validate("Q", &accept, Some(3), "d").is_err());
        assert!(prompter.ask_and_hide_answer("Q", &accept, Some(3), "d").is_err());
    }
}
