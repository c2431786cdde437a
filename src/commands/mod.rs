//! Command implementations for envcreate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod create;
mod salt;

use crate::cli::Command;
use envcreate::context::ProjectContext;
use envcreate::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(base_dir: Option<&Path>, config: Option<&Path>, command: Command) -> Result<()> {
    match command {
        Command::Create(args) => {
            let ctx = ProjectContext::resolve(base_dir, config)?;
            create::cmd_create(&ctx, args)
        }
        Command::Salt(args) => salt::cmd_salt(args),
        Command::Check(args) => {
            let ctx = ProjectContext::resolve(base_dir, config)?;
            check::cmd_check(&ctx, args)
        }
    }
}
