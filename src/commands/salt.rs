//! Implementation of the `envcreate salt` command.

use crate::cli::SaltArgs;
use envcreate::error::Result;
use envcreate::salt::generate_salt;

pub fn cmd_salt(args: SaltArgs) -> Result<()> {
    println!("{}", generate_salt(args.length));
    Ok(())
}
