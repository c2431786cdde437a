//! Built-in field table used when a project has no `envcreate.yaml`.
//!
//! Mirrors the variables a Bedrock-style WordPress install reads from `.env`.

use super::model::{DefaultValue, FieldDefinition, QuestionType, Value};
use super::table::FieldTable;
use crate::error::Result;
use crate::salt::DEFAULT_SALT_LENGTH;

/// WordPress secret keys and salts.
pub const WORDPRESS_SALT_KEYS: &[&str] = &[
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
];

pub fn wordpress_table() -> Result<FieldTable> {
    let mut fields = vec![
        FieldDefinition::new(
            "WP_ENV",
            QuestionType::AskAndValidate,
            "Environment (development, staging, production)",
            DefaultValue::literal("development"),
        )
        .error_message("Environment can not be empty."),
        FieldDefinition::new(
            "WP_HOME",
            QuestionType::AskAndValidate,
            "Site URL",
            DefaultValue::computed(|ctx| Value::Text(format!("http://{}.local", ctx.dir_name()))),
        )
        .error_message("Site URL can not be empty.")
        .after_resolve(|env| {
            let home = env.get("WP_HOME").map(Value::render).unwrap_or_default();
            env.set("WP_SITEURL", format!("{}/wp", home.trim_end_matches('/')));
        }),
        FieldDefinition::new(
            "DB_SECTION",
            QuestionType::AskConfirmation,
            "Configure the database now?",
            DefaultValue::literal(true),
        )
        .section_mark(),
        FieldDefinition::new(
            "DB_NAME",
            QuestionType::AskAndValidate,
            "Database name",
            DefaultValue::computed(|ctx| Value::Text(ctx.dir_slug())),
        )
        .requires("DB_SECTION", true)
        .error_message("Database name can not be empty."),
        FieldDefinition::new(
            "DB_USER",
            QuestionType::AskAndValidate,
            "Database user",
            DefaultValue::literal("root"),
        )
        .requires("DB_SECTION", true),
        FieldDefinition::new(
            "DB_PASSWORD",
            QuestionType::AskAndHideAnswer,
            "Database password",
            DefaultValue::literal("root"),
        )
        .requires("DB_SECTION", true)
        .error_message("Database password can not be empty."),
        FieldDefinition::new(
            "DB_HOST",
            QuestionType::Ask,
            "Database host",
            DefaultValue::literal("localhost"),
        )
        .requires("DB_SECTION", true),
        FieldDefinition::new(
            "DB_PREFIX",
            QuestionType::Ask,
            "Database table prefix",
            DefaultValue::literal("wp_"),
        )
        .requires("DB_SECTION", true),
        FieldDefinition::new(
            "MULTISITE",
            QuestionType::AskConfirmation,
            "Is this a multisite install?",
            DefaultValue::literal(false),
        ),
        FieldDefinition::new(
            "DOMAIN_CURRENT_SITE",
            QuestionType::AskAndValidate,
            "Main site domain",
            DefaultValue::computed(|ctx| {
                let home = ctx.get_text("WP_HOME");
                let without_scheme = home.split("://").nth(1).unwrap_or(&home);
                Value::Text(without_scheme.split('/').next().unwrap_or_default().to_string())
            }),
        )
        .requires("MULTISITE", true),
    ];

    fields.extend(WORDPRESS_SALT_KEYS.iter().map(|key| {
        FieldDefinition::new(*key, QuestionType::Ask, *key, DefaultValue::literal(""))
    }));

    FieldTable::new(
        fields,
        WORDPRESS_SALT_KEYS.iter().map(|k| k.to_string()).collect(),
        DEFAULT_SALT_LENGTH,
    )
}
