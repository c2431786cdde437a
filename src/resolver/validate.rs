//! Answer validators handed to the prompter.

use regex::Regex;
use std::sync::LazyLock;

/// Message used when a field has no `error_message` of its own.
pub const GENERIC_EMPTY_MESSAGE: &str = "Value can not be empty.";

static FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid filename regex"));

/// Build the blank-answer validator for a field.
///
/// The answer is trimmed; an empty result is rejected with `error_message`
/// (or [`GENERIC_EMPTY_MESSAGE`]), anything else is accepted trimmed.
pub fn not_empty(
    error_message: Option<&str>,
) -> impl Fn(&str) -> std::result::Result<String, String> + '_ {
    move |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(error_message
                .filter(|m| !m.is_empty())
                .unwrap_or(GENERIC_EMPTY_MESSAGE)
                .to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}

/// Accept bare filenames made of alphanumerics, dots, dashes and underscores.
pub fn valid_filename(value: &str) -> std::result::Result<String, String> {
    if FILENAME_REGEX.is_match(value) {
        Ok(value.to_string())
    } else {
        Err("The filename can only contain alphanumerics, dots, and underscores".to_string())
    }
}
