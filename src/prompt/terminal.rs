//! dialoguer-backed prompter for a human at a terminal.

use super::{Prompter, Validator, retry_validated};
use crate::error::{EnvError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use std::io::{self, IsTerminal};

pub struct TerminalPrompter {
    theme: ColorfulTheme,
    interactive: bool,
}

impl TerminalPrompter {
    /// Create a prompter; it is interactive only when stdin and stderr are
    /// terminals and `no_interaction` is false.
    pub fn new(no_interaction: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive: !no_interaction && io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn read_line(&self, question: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt_text(question))
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn read_hidden(&self, question: &str) -> Result<String> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt_text(question))
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }
}

/// dialoguer adds its own separator after the prompt.
fn prompt_text(question: &str) -> String {
    question.trim_end().trim_end_matches(':').to_string()
}

fn prompt_error(err: dialoguer::Error) -> EnvError {
    EnvError::PromptError(err.to_string())
}

impl Prompter for TerminalPrompter {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.read_line(question)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn ask_confirmation(&mut self, question: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt_text(question))
            .default(default)
            .show_default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn ask_and_validate(
        &mut self,
        question: &str,
        validator: Validator<'_>,
        attempts: Option<u32>,
        default: &str,
    ) -> Result<String> {
        retry_validated(
            || self.read_line(question),
            |message| eprintln!("{}", message),
            validator,
            attempts,
            default,
        )
    }

    fn ask_and_hide_answer(
        &mut self,
        question: &str,
        validator: Validator<'_>,
        attempts: Option<u32>,
        default: &str,
    ) -> Result<String> {
        retry_validated(
            || self.read_hidden(question),
            |message| eprintln!("{}", message),
            validator,
            attempts,
            default,
        )
    }

    fn write(&mut self, text: &str) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_text_drops_trailing_separator() {
        assert_eq!(prompt_text("Site URL [http://a.local]: "), "Site URL [http://a.local]");
        assert_eq!(prompt_text("Overwrite? [y,N] "), "Overwrite? [y,N]");
    }

    #[test]
    fn no_interaction_flag_forces_non_interactive() {
        let prompter = TerminalPrompter::new(true);
        assert!(!prompter.is_interactive());
    }
}
