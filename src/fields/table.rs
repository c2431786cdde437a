//! Validated, ordered field table.

use super::model::FieldDefinition;
use crate::error::{EnvError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid field key regex"));

/// Ordered field definitions plus the keys that receive generated salts.
///
/// Construction enforces:
/// - keys are valid variable names and unique
/// - every `requires` names a field declared earlier
/// - every salt key names a field that is not a section marker
#[derive(Debug, Clone)]
pub struct FieldTable {
    fields: Vec<FieldDefinition>,
    salt_keys: Vec<String>,
    salt_length: usize,
}

impl FieldTable {
    pub fn new(
        fields: Vec<FieldDefinition>,
        salt_keys: Vec<String>,
        salt_length: usize,
    ) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();

        for field in &fields {
            if !KEY_REGEX.is_match(&field.key) {
                return Err(EnvError::ConfigError(format!(
                    "'{}' is not a valid variable name",
                    field.key
                )));
            }

            if let Some(requires) = &field.requires
                && !seen.contains(requires.key.as_str())
            {
                return Err(EnvError::ConfigError(format!(
                    "field '{}' requires '{}', which is not declared before it",
                    field.key, requires.key
                )));
            }

            if !seen.insert(field.key.as_str()) {
                return Err(EnvError::ConfigError(format!(
                    "duplicate field key '{}'",
                    field.key
                )));
            }
        }

        let mut seen_salts: HashSet<&str> = HashSet::new();
        for key in &salt_keys {
            let field = fields.iter().find(|f| &f.key == key).ok_or_else(|| {
                EnvError::ConfigError(format!("salt key '{}' is not a declared field", key))
            })?;

            if field.section_mark {
                return Err(EnvError::ConfigError(format!(
                    "salt key '{}' cannot be a section marker",
                    key
                )));
            }

            if !seen_salts.insert(key.as_str()) {
                return Err(EnvError::ConfigError(format!(
                    "salt key '{}' is listed twice",
                    key
                )));
            }
        }

        Ok(Self {
            fields,
            salt_keys,
            salt_length,
        })
    }

    /// Field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn salt_keys(&self) -> &[String] {
        &self.salt_keys
    }

    pub fn salt_length(&self) -> usize {
        self.salt_length
    }

    /// Override the salt length, e.g. from the command line.
    pub fn with_salt_length(mut self, salt_length: usize) -> Self {
        self.salt_length = salt_length;
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn is_salt_key(&self, key: &str) -> bool {
        self.salt_keys.iter().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of lines a run writes before any after-hook additions.
    pub fn output_key_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.section_mark).count()
    }
}
