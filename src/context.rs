//! Project context resolution.
//!
//! Finds the project base directory (where the environment file and
//! `envcreate.yaml` live) and loads the field table that applies to it.

use crate::config::{DEFAULT_CONFIG_FILE, TableConfig};
use crate::error::{EnvError, Result};
use crate::fields::{FieldTable, builtin};
use std::env;
use std::path::{Path, PathBuf};

/// Where a field table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Loaded from this config file.
    File(PathBuf),
    /// No config file; the built-in WordPress table.
    Builtin,
}

/// Resolved paths for one invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub base_dir: PathBuf,
    pub config_path: PathBuf,
    /// Whether `config_path` was given explicitly and therefore must exist.
    config_required: bool,
}

impl ProjectContext {
    /// Resolve from the current working directory, honoring overrides.
    pub fn resolve(base_dir: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            EnvError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, base_dir, config)
    }

    /// Resolve relative to `cwd`.
    pub fn resolve_from(cwd: &Path, base_dir: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };

        if !base_dir.is_dir() {
            return Err(EnvError::UserError(format!(
                "base directory '{}' does not exist or is not a directory",
                base_dir.display()
            )));
        }

        let (config_path, config_required) = match config {
            Some(path) => (cwd.join(path), true),
            None => (base_dir.join(DEFAULT_CONFIG_FILE), false),
        };

        Ok(Self {
            base_dir,
            config_path,
            config_required,
        })
    }

    /// Where the field table for this project comes from.
    pub fn table_source(&self) -> Result<TableSource> {
        if self.config_path.is_file() {
            Ok(TableSource::File(self.config_path.clone()))
        } else if self.config_required {
            Err(EnvError::ConfigError(format!(
                "config file '{}' not found",
                self.config_path.display()
            )))
        } else {
            Ok(TableSource::Builtin)
        }
    }

    /// Load the project's field table.
    pub fn load_table(&self) -> Result<FieldTable> {
        match self.table_source()? {
            TableSource::File(path) => {
                tracing::debug!(path = %path.display(), "loading field table");
                TableConfig::load(&path)?.into_table()
            }
            TableSource::Builtin => {
                tracing::debug!("no config file, using built-in field table");
                builtin::wordpress_table()
            }
        }
    }
}
