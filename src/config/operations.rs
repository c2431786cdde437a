//! Loading `envcreate.yaml` and turning it into a [`FieldTable`].

use super::model::{DeriveConfig, FieldConfig, TableConfig};
use super::template::{DIR_NAME, DIR_SLUG, Template};
use crate::error::{EnvError, Result};
use crate::fields::{DefaultValue, FieldDefinition, FieldTable, Value};
use std::collections::HashSet;
use std::path::Path;

impl TableConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(TableConfig)` - Successfully parsed config
    /// * `Err(EnvError::ConfigError)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            EnvError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| EnvError::ConfigError(format!("failed to parse config YAML: {}", e)))
    }

    /// Build the validated field table.
    ///
    /// Beyond the checks [`FieldTable::new`] performs, this rejects fields
    /// without any default, templates referencing unknown names, and derive
    /// targets that name a field declared later.
    pub fn into_table(self) -> Result<FieldTable> {
        let all_keys: HashSet<String> = self.fields.iter().map(|f| f.key.clone()).collect();
        let mut declared: HashSet<String> = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());

        for field in self.fields {
            let definition = build_field(field, &declared, &all_keys)?;
            declared.insert(definition.key.clone());
            fields.push(definition);
        }

        FieldTable::new(fields, self.salt_keys, self.salt_length)
    }
}

fn build_field(
    field: FieldConfig,
    declared: &HashSet<String>,
    all_keys: &HashSet<String>,
) -> Result<FieldDefinition> {
    let key = field.key;
    let default = build_default(
        &key,
        field.default.as_ref(),
        field.default_template.as_deref(),
        declared,
    )?;
    let question = field.question.unwrap_or_else(|| key.clone());

    let mut definition = FieldDefinition::new(key.clone(), field.question_type, question, default);

    if let Some(requires) = field.requires {
        let value = convert_value(&key, &requires.value)?;
        definition = definition.requires(requires.key, value);
    }

    if !field.derive.is_empty() {
        let derived = build_derives(&key, field.derive, declared, all_keys)?;
        definition = definition.after_resolve(move |env| {
            for (target, template) in &derived {
                let value =
                    template.render(|name| env.get(name).map(Value::render).unwrap_or_default());
                env.set(target.as_str(), value);
            }
        });
    }

    if field.section_mark {
        definition = definition.section_mark();
    }

    if let Some(message) = field.error_message {
        definition = definition.error_message(message);
    }

    Ok(definition)
}

fn build_default(
    key: &str,
    literal: Option<&serde_yaml::Value>,
    template: Option<&str>,
    declared: &HashSet<String>,
) -> Result<DefaultValue> {
    if let Some(raw) = template {
        let template = Template::parse(raw);
        for name in template.placeholders() {
            if name != DIR_NAME && name != DIR_SLUG && !declared.contains(name) {
                return Err(EnvError::ConfigError(format!(
                    "field '{}': default_template references '{}', which is neither {}, {} nor an earlier field",
                    key, name, DIR_NAME, DIR_SLUG
                )));
            }
        }

        return Ok(DefaultValue::computed(move |ctx| {
            Value::Text(template.render(|name| match name {
                DIR_NAME => ctx.dir_name(),
                DIR_SLUG => ctx.dir_slug(),
                other => ctx.get_text(other),
            }))
        }));
    }

    match literal {
        Some(raw) => Ok(DefaultValue::Literal(convert_value(key, raw)?)),
        None => Err(EnvError::ConfigError(format!(
            "field '{}' has no default; set `default` or `default_template`",
            key
        ))),
    }
}

fn build_derives(
    key: &str,
    derives: Vec<DeriveConfig>,
    declared: &HashSet<String>,
    all_keys: &HashSet<String>,
) -> Result<Vec<(String, Template)>> {
    derives
        .into_iter()
        .map(|derive| {
            if all_keys.contains(&derive.key)
                && derive.key != key
                && !declared.contains(&derive.key)
            {
                return Err(EnvError::ConfigError(format!(
                    "field '{}' derives '{}', which is declared later and would be overwritten",
                    key, derive.key
                )));
            }

            let template = Template::parse(&derive.template);
            for name in template.placeholders() {
                if name != key && !declared.contains(name) {
                    return Err(EnvError::ConfigError(format!(
                        "field '{}': derive template references '{}', which is not this or an earlier field",
                        key, name
                    )));
                }
            }

            Ok((derive.key, template))
        })
        .collect()
}

fn convert_value(key: &str, raw: &serde_yaml::Value) -> Result<Value> {
    match raw {
        serde_yaml::Value::Bool(flag) => Ok(Value::Flag(*flag)),
        serde_yaml::Value::String(text) => Ok(Value::Text(text.clone())),
        serde_yaml::Value::Number(number) => Ok(Value::Text(number.to_string())),
        _ => Err(EnvError::ConfigError(format!(
            "field '{}': values must be a string, number or boolean",
            key
        ))),
    }
}
