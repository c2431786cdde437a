use crate::error::Result;
use crate::prompt::{Prompter, Validator, retry_validated};
use std::collections::VecDeque;

/// One scripted operator answer.
#[derive(Debug, Clone)]
pub(crate) enum Answer {
    Text(String),
    Confirm(bool),
}

impl Answer {
    pub(crate) fn text(text: &str) -> Self {
        Answer::Text(text.to_string())
    }

    pub(crate) fn confirm(yes: bool) -> Self {
        Answer::Confirm(yes)
    }
}

/// Prompter that replays answers and records every question and output line.
pub(crate) struct ScriptedPrompter {
    interactive: bool,
    answers: VecDeque<Answer>,
    pub(crate) asked: Vec<String>,
    pub(crate) output: Vec<String>,
}

impl ScriptedPrompter {
    pub(crate) fn interactive(answers: Vec<Answer>) -> Self {
        Self {
            interactive: true,
            answers: answers.into(),
            asked: Vec::new(),
            output: Vec::new(),
        }
    }

    pub(crate) fn non_interactive() -> Self {
        Self {
            interactive: false,
            answers: VecDeque::new(),
            asked: Vec::new(),
            output: Vec::new(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next_text(&mut self, question: &str) -> String {
        self.asked.push(question.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => text,
            other => panic!("expected a text answer for '{}', got {:?}", question, other),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.next_text(question);
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn ask_confirmation(&mut self, question: &str, _default: bool) -> Result<bool> {
        self.asked.push(question.to_string());
        match self.answers.pop_front() {
            Some(Answer::Confirm(yes)) => Ok(yes),
            other => panic!("expected a confirmation for '{}', got {:?}", question, other),
        }
    }

    fn ask_and_validate(
        &mut self,
        question: &str,
        validator: Validator<'_>,
        attempts: Option<u32>,
        default: &str,
    ) -> Result<String> {
        let mut rejections = Vec::new();
        let result = retry_validated(
            || Ok(self.next_text(question)),
            |message| rejections.push(message.to_string()),
            validator,
            attempts,
            default,
        );
        self.output.extend(rejections);
        result
    }

    fn ask_and_hide_answer(
        &mut self,
        question: &str,
        validator: Validator<'_>,
        attempts: Option<u32>,
        default: &str,
    ) -> Result<String> {
        self.ask_and_validate(question, validator, attempts, default)
    }

    fn write(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
