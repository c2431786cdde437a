//! Rendering and writing the environment file.
//!
//! # Format
//!
//! One `KEY='VALUE'` line per entry, LF separated, with a trailing newline.
//! Values are not escaped: a value containing `'` produces a line other
//! dotenv readers will not parse.

use crate::environment::ResolvedEnvironment;
use crate::error::{EnvError, Result};
use crate::fs::locked_atomic_write;
use crate::prompt::Prompter;
use std::path::Path;

/// What happened to the generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written.
    Written,
    /// The write failed and the content was printed instead.
    Dumped { error: String },
}

/// Render entries in order as `KEY='VALUE'` lines.
pub fn render(env: &ResolvedEnvironment) -> String {
    let lines: Vec<String> = env
        .iter()
        .map(|(key, value)| format!("{}='{}'", key, value.render()))
        .collect();

    format!("{}\n", lines.join("\n"))
}

/// Parse `KEY='VALUE'` lines back into ordered pairs. Blank lines are skipped.
pub fn parse(content: &str) -> Result<Vec<(String, String)>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_line(line).ok_or_else(|| {
                EnvError::UserError(format!(
                    "line {} is not of the form KEY='VALUE': {}",
                    index + 1,
                    line
                ))
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, quoted) = line.split_once('=')?;
    let value = quoted.strip_prefix('\'')?.strip_suffix('\'')?;
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

/// Write `content` to `path`, or print it if the write fails.
///
/// Failure is reported to the operator rather than returned, so generated
/// values (including fresh salts) are never lost. No second write is tried.
pub fn write_env_file(
    prompter: &mut dyn Prompter,
    path: &Path,
    display_name: &str,
    content: &str,
) -> WriteOutcome {
    match locked_atomic_write(path, content.as_bytes()) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "environment file written");
            prompter.write(&format!("{} successfully created.", display_name));
            WriteOutcome::Written
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to write environment file");
            prompter.write("An error occurred while creating your .env file. Error message:");
            prompter.write(&format!("{}\n", err));
            prompter.write("Below is the environment variables generated:");
            prompter.write(content);
            WriteOutcome::Dumped {
                error: err.to_string(),
            }
        }
    }
}
