//! One complete `.env` generation run.

use crate::environment::ResolvedEnvironment;
use crate::error::Result;
use crate::fields::FieldTable;
use crate::prompt::Prompter;
use crate::resolver::{Mode, Resolver, Target, select_target};
use crate::salt::apply_salts;
use crate::serialize::{WriteOutcome, render, write_env_file};
use std::path::PathBuf;

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub target: Target,
    pub outcome: WriteOutcome,
    /// How many times the operator declined to overwrite an existing file.
    pub restarts: u32,
    pub environment: ResolvedEnvironment,
    pub content: String,
}

/// Drives target selection, resolution, salting and the single write.
pub struct Creator {
    table: FieldTable,
    base_dir: PathBuf,
    filename_override: Option<String>,
}

impl Creator {
    pub fn new(table: FieldTable, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            table,
            base_dir: base_dir.into(),
            filename_override: None,
        }
    }

    /// Use this filename instead of asking (the `ENV_FILE` variable).
    pub fn with_filename_override(mut self, filename: Option<String>) -> Self {
        self.filename_override = filename;
        self
    }

    /// Run to completion.
    ///
    /// When the chosen file already exists in interactive mode and the
    /// operator declines to overwrite it, the whole run starts over from
    /// filename selection. The file is written at most once.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<CreateReport> {
        let mut restarts = 0;

        loop {
            let mode = Mode::detect(prompter);
            let target = select_target(
                prompter,
                mode,
                self.filename_override.as_deref(),
                &self.base_dir,
            )?;

            if mode == Mode::Interactive && target.path.exists() {
                let replace = prompter.ask_confirmation(
                    &format!(
                        "{} already exists. Do you want to override it? [y,N] ",
                        target.filename
                    ),
                    false,
                )?;

                if !replace {
                    restarts += 1;
                    tracing::info!(file = %target.filename, restarts, "overwrite declined, starting over");
                    continue;
                }
            }

            if mode == Mode::Interactive {
                prompter.write(&format!("Generating \"{}\" file", target.filename));
            }

            let mut environment = Resolver::new(&self.table, &self.base_dir).resolve(prompter)?;
            apply_salts(
                &mut environment,
                self.table.salt_keys(),
                self.table.salt_length(),
            );

            let content = render(&environment);
            let outcome = write_env_file(prompter, &target.path, &target.filename, &content);

            return Ok(CreateReport {
                target,
                outcome,
                restarts,
                environment,
                content,
            });
        }
    }
}
