//! Serde model of `envcreate.yaml`.

use crate::fields::QuestionType;
use crate::salt::DEFAULT_SALT_LENGTH;
use serde::{Deserialize, Serialize};

/// Top-level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Length of generated salts.
    #[serde(default = "default_salt_length")]
    pub salt_length: usize,

    /// Fields overwritten with generated salts after resolution.
    #[serde(default)]
    pub salt_keys: Vec<String>,

    /// Field definitions in prompt order.
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            salt_length: default_salt_length(),
            salt_keys: Vec::new(),
            fields: Vec::new(),
        }
    }
}

/// One field entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub key: String,

    #[serde(rename = "type", default = "default_question_type")]
    pub question_type: QuestionType,

    /// Question text; the key is used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// Literal default: string, number or boolean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_yaml::Value>,

    /// Computed default; wins over `default` when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<RequiresConfig>,

    /// Values set after this field is resolved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derive: Vec<DeriveConfig>,

    #[serde(default)]
    pub section_mark: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiresConfig {
    pub key: String,
    pub value: serde_yaml::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveConfig {
    pub key: String,
    pub template: String,
}

fn default_salt_length() -> usize {
    DEFAULT_SALT_LENGTH
}

fn default_question_type() -> QuestionType {
    QuestionType::Ask
}
