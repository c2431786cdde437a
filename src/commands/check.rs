//! Implementation of the `envcreate check` command.
//!
//! Loads the field table (which runs every construction-time check) and
//! prints what a `create` run would produce.

use crate::cli::CheckArgs;
use envcreate::context::{ProjectContext, TableSource};
use envcreate::error::{EnvError, Result};
use envcreate::fields::{DefaultValue, FieldTable, QuestionType, Requires, Value};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TableSummary {
    source: String,
    salt_length: usize,
    salt_keys: Vec<String>,
    output_keys: usize,
    fields: Vec<FieldSummary>,
}

#[derive(Debug, Serialize)]
struct FieldSummary {
    key: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    /// `None` for computed defaults.
    default: Option<Value>,
    computed_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    requires: Option<Requires>,
    section_mark: bool,
    salt: bool,
}

pub fn cmd_check(ctx: &ProjectContext, args: CheckArgs) -> Result<()> {
    let source = ctx.table_source()?;
    let table = ctx.load_table()?;
    let summary = summarize(&source, &table);

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| EnvError::UserError(format!("failed to serialize summary: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&summary));
    }

    Ok(())
}

fn summarize(source: &TableSource, table: &FieldTable) -> TableSummary {
    let source = match source {
        TableSource::File(path) => path.display().to_string(),
        TableSource::Builtin => "built-in".to_string(),
    };

    let fields = table
        .fields()
        .iter()
        .map(|field| {
            let (default, computed_default) = match &field.default {
                DefaultValue::Literal(value) => (Some(value.clone()), false),
                DefaultValue::Computed(_) => (None, true),
            };
            FieldSummary {
                key: field.key.clone(),
                question_type: field.question_type,
                default,
                computed_default,
                requires: field.requires.clone(),
                section_mark: field.section_mark,
                salt: table.is_salt_key(&field.key),
            }
        })
        .collect();

    TableSummary {
        source,
        salt_length: table.salt_length(),
        salt_keys: table.salt_keys().to_vec(),
        output_keys: table.output_key_count(),
        fields,
    }
}

fn render_text(summary: &TableSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Field table: {}\n", summary.source));
    out.push_str(&format!(
        "Fields: {} ({} written)\n",
        summary.fields.len(),
        summary.output_keys
    ));
    out.push_str(&format!(
        "Salts: {} x {} characters\n\n",
        summary.salt_keys.len(),
        summary.salt_length
    ));

    for field in &summary.fields {
        let default = match &field.default {
            Some(value) => format!("'{}'", value),
            None => "(computed)".to_string(),
        };
        let mut notes = Vec::new();
        if field.section_mark {
            notes.push("section".to_string());
        }
        if field.salt {
            notes.push("salt".to_string());
        }
        if let Some(requires) = &field.requires {
            notes.push(format!("requires {}={}", requires.key, requires.value));
        }

        out.push_str(&format!(
            "  {:<24} {:<20} {}",
            field.key,
            field.question_type.to_string(),
            default
        ));
        if !notes.is_empty() {
            out.push_str(&format!("  [{}]", notes.join(", ")));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use envcreate::fields::FieldDefinition;
    use envcreate::fields::builtin::wordpress_table;

    fn small_table() -> FieldTable {
        FieldTable::new(
            vec![
                FieldDefinition::new(
                    "USE_DB",
                    QuestionType::AskConfirmation,
                    "Database?",
                    DefaultValue::literal(true),
                )
                .section_mark(),
                FieldDefinition::new(
                    "DB_NAME",
                    QuestionType::Ask,
                    "Name",
                    DefaultValue::computed(|ctx| Value::Text(ctx.dir_slug())),
                )
                .requires("USE_DB", true),
                FieldDefinition::new("SECRET", QuestionType::Ask, "Secret", DefaultValue::literal("")),
            ],
            vec!["SECRET".to_string()],
            48,
        )
        .unwrap()
    }

    #[test]
    fn summary_reflects_table() {
        let summary = summarize(&TableSource::Builtin, &small_table());

        assert_eq!(summary.source, "built-in");
        assert_eq!(summary.output_keys, 2);
        assert_eq!(summary.salt_length, 48);
        assert!(summary.fields[0].section_mark);
        assert!(summary.fields[1].computed_default);
        assert!(summary.fields[1].default.is_none());
        assert!(summary.fields[2].salt);
    }

    #[test]
    fn text_lists_every_field_with_notes() {
        let text = render_text(&summarize(&TableSource::Builtin, &small_table()));

        assert!(text.starts_with("Field table: built-in\n"));
        assert!(text.contains("Fields: 3 (2 written)"));
        assert!(text.contains("[section]"));
        assert!(text.contains("(computed)  [requires USE_DB=true]"));
        assert!(text.contains("[salt]"));
    }

    #[test]
    fn json_summary_uses_config_names() {
        let summary = summarize(&TableSource::Builtin, &wordpress_table().unwrap());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["fields"][0]["key"], "WP_ENV");
        assert_eq!(json["fields"][0]["type"], "ask_and_validate");
        assert_eq!(json["salt_keys"].as_array().unwrap().len(), 8);
    }
}
