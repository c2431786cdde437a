//! envcreate: generate a project's `.env` file during installation.
//!
//! A [`fields::FieldTable`] describes each variable: how to ask for it, its
//! default, what it depends on and what to do once it is known. A
//! [`creator::Creator`] resolves the table either by prompting an operator
//! or, when no terminal is available, from defaults alone, fills the salt
//! keys with random strings and writes `KEY='VALUE'` lines to the target.
//!
//! ```no_run
//! use envcreate::creator::Creator;
//! use envcreate::fields::builtin::wordpress_table;
//! use envcreate::prompt::NonInteractivePrompter;
//!
//! let creator = Creator::new(wordpress_table()?, "/srv/www/site");
//! let report = creator.run(&mut NonInteractivePrompter::new())?;
//! println!("{}", report.target.path.display());
//! # Ok::<(), envcreate::error::EnvError>(())
//! ```

pub mod config;
pub mod context;
pub mod creator;
pub mod environment;
pub mod error;
pub mod exit_codes;
pub mod fields;
pub mod fs;
pub mod logging;
pub mod prompt;
pub mod resolver;
pub mod salt;
pub mod serialize;

#[cfg(test)]
pub(crate) mod test_support;
