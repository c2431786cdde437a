//! Choosing the file the environment is written to.

use super::Mode;
use super::validate::valid_filename;
use crate::error::Result;
use crate::prompt::Prompter;
use std::path::{Path, PathBuf};

/// Filename used when nothing else is given.
pub const DEFAULT_FILENAME: &str = ".env";

/// Where the generated file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Name as given by the operator or override, used in messages.
    pub filename: String,
    /// Absolute, or relative to the base directory.
    pub path: PathBuf,
}

/// Pick the target filename.
///
/// An override (the `ENV_FILE` variable) wins in both modes. Otherwise
/// non-interactive runs use [`DEFAULT_FILENAME`] and interactive runs ask.
pub fn select_target(
    prompter: &mut dyn Prompter,
    mode: Mode,
    filename_override: Option<&str>,
    base_dir: &Path,
) -> Result<Target> {
    let filename = match filename_override.filter(|f| !f.is_empty()) {
        Some(filename) => filename.to_string(),
        None if mode == Mode::NonInteractive => DEFAULT_FILENAME.to_string(),
        None => prompter.ask_and_validate(
            &format!(
                "Filename to write environment variables to [{}]: ",
                DEFAULT_FILENAME
            ),
            &valid_filename,
            None,
            DEFAULT_FILENAME,
        )?,
    };

    let path = resolve_target_path(base_dir, &filename);
    Ok(Target { filename, path })
}

/// Absolute paths are kept, anything else is placed under `base_dir`.
pub fn resolve_target_path(base_dir: &Path, filename: &str) -> PathBuf {
    let candidate = Path::new(filename);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    }
}
