//! Implementation of the `envcreate create` command.

use crate::cli::CreateArgs;
use envcreate::context::ProjectContext;
use envcreate::creator::Creator;
use envcreate::error::Result;
use envcreate::prompt::TerminalPrompter;
use envcreate::serialize::WriteOutcome;

/// Resolve the project's field table and write the environment file.
///
/// A failed write is not an error: the content has already been printed
/// for the operator to copy.
pub fn cmd_create(ctx: &ProjectContext, args: CreateArgs) -> Result<()> {
    let mut table = ctx.load_table()?;
    if let Some(length) = args.salt_length {
        table = table.with_salt_length(length);
    }

    let mut prompter = TerminalPrompter::new(args.no_interaction);
    let report = Creator::new(table, &ctx.base_dir)
        .with_filename_override(args.env_file)
        .run(&mut prompter)?;

    match &report.outcome {
        WriteOutcome::Written => tracing::info!(
            path = %report.target.path.display(),
            keys = report.environment.len(),
            restarts = report.restarts,
            "created environment file"
        ),
        WriteOutcome::Dumped { error } => tracing::warn!(
            path = %report.target.path.display(),
            %error,
            "environment file not written, content printed instead"
        ),
    }

    Ok(())
}
