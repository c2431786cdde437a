//! CLI argument parsing for envcreate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use envcreate::salt::DEFAULT_SALT_LENGTH;
use std::path::PathBuf;

/// envcreate: generate a project's `.env` file during installation.
///
/// Prompts for each variable when run from a terminal, and falls back to
/// defaults for CI and other non-interactive installs.
#[derive(Parser, Debug)]
#[command(name = "envcreate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Project directory the environment file is written to (default: cwd).
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Field table config file (default: <base-dir>/envcreate.yaml, falling
    /// back to the built-in WordPress table).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Arguments for `create` when it runs as the default command.
    #[command(flatten)]
    pub create: CreateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for envcreate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the environment file.
    ///
    /// Intended to be run from a package manager's post-install hook.
    Create(CreateArgs),

    /// Print a freshly generated salt.
    Salt(SaltArgs),

    /// Validate the field table and print a summary.
    Check(CheckArgs),
}

/// Arguments for the `create` command.
#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Filename or path to write; skips the filename question.
    #[arg(long, env = "ENV_FILE", value_name = "FILE")]
    pub env_file: Option<String>,

    /// Never prompt; use defaults for every field.
    #[arg(short = 'n', long)]
    pub no_interaction: bool,

    /// Override the salt length from the field table.
    #[arg(long, value_name = "N")]
    pub salt_length: Option<usize>,
}

/// Arguments for the `salt` command.
#[derive(Args, Debug)]
pub struct SaltArgs {
    /// Number of characters.
    #[arg(short, long, default_value_t = DEFAULT_SALT_LENGTH)]
    pub length: usize,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; `create` when no subcommand was given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Create(self.create))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_with_flags() {
        let cli = Cli::try_parse_from([
            "envcreate",
            "create",
            "-n",
            "--env-file",
            "staging.env",
            "--salt-length",
            "32",
        ])
        .unwrap();

        match cli.into_command() {
            Command::Create(args) => {
                assert!(args.no_interaction);
                assert_eq!(args.env_file.as_deref(), Some("staging.env"));
                assert_eq!(args.salt_length, Some(32));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["envcreate", "check", "--json", "--base-dir", "site", "-v"])
            .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.base_dir, Some(PathBuf::from("site")));
        assert!(matches!(cli.command, Some(Command::Check(CheckArgs { json: true }))));
    }

    #[test]
    fn salt_length_defaults() {
        let cli = Cli::try_parse_from(["envcreate", "salt"]).unwrap();
        match cli.into_command() {
            Command::Salt(args) => assert_eq!(args.length, DEFAULT_SALT_LENGTH),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn bare_invocation_runs_create() {
        let cli = Cli::try_parse_from(["envcreate"]).unwrap();

        match cli.into_command() {
            Command::Create(args) => {
                assert!(!args.no_interaction);
                assert_eq!(args.salt_length, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn create_flags_work_without_subcommand() {
        let cli =
            Cli::try_parse_from(["envcreate", "-n", "--env-file", "ci.env", "-v"]).unwrap();

        assert!(cli.verbose);
        match cli.into_command() {
            Command::Create(args) => {
                assert!(args.no_interaction);
                assert_eq!(args.env_file.as_deref(), Some("ci.env"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn create_flags_conflict_with_other_subcommands() {
        assert!(Cli::try_parse_from(["envcreate", "-n", "salt"]).is_err());
    }
}
