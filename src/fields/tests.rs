//! Tests for the field table model.

use super::builtin::{WORDPRESS_SALT_KEYS, wordpress_table};
use super::*;
use crate::environment::ResolvedEnvironment;
use crate::error::EnvError;
use std::path::Path;

fn ask(key: &str) -> FieldDefinition {
    FieldDefinition::new(key, QuestionType::Ask, key, DefaultValue::literal(""))
}

#[test]
fn valid_table_is_accepted() {
    let table = FieldTable::new(
        vec![ask("A"), ask("B").requires("A", "yes"), ask("SALT")],
        vec!["SALT".to_string()],
        32,
    )
    .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.salt_length(), 32);
    assert!(table.is_salt_key("SALT"));
    assert!(!table.is_salt_key("A"));
    assert_eq!(table.get("B").unwrap().requires.as_ref().unwrap().key, "A");
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = FieldTable::new(vec![ask("A"), ask("A")], vec![], 64).unwrap_err();
    assert!(matches!(err, EnvError::ConfigError(ref m) if m.contains("duplicate")));
}

#[test]
fn invalid_key_is_rejected() {
    let err = FieldTable::new(vec![ask("1BAD")], vec![], 64).unwrap_err();
    assert!(matches!(err, EnvError::ConfigError(_)));

    let err = FieldTable::new(vec![ask("HAS SPACE")], vec![], 64).unwrap_err();
    assert!(matches!(err, EnvError::ConfigError(_)));
}

#[test]
fn requires_must_reference_earlier_field() {
    let err = FieldTable::new(
        vec![ask("B").requires("A", true), ask("A")],
        vec![],
        64,
    )
    .unwrap_err();
    assert!(err.to_string().contains("not declared before it"));
}

#[test]
fn requires_cannot_reference_itself() {
    let err = FieldTable::new(vec![ask("A").requires("A", true)], vec![], 64).unwrap_err();
    assert!(matches!(err, EnvError::ConfigError(_)));
}

#[test]
fn salt_key_must_exist() {
    let err = FieldTable::new(vec![ask("A")], vec!["MISSING".to_string()], 64).unwrap_err();
    assert!(err.to_string().contains("MISSING"));
}

#[test]
fn salt_key_cannot_be_section_mark() {
    let err = FieldTable::new(
        vec![ask("A").section_mark()],
        vec!["A".to_string()],
        64,
    )
    .unwrap_err();
    assert!(err.to_string().contains("section marker"));
}

#[test]
fn salt_key_listed_twice_is_rejected() {
    let err = FieldTable::new(
        vec![ask("A")],
        vec!["A".to_string(), "A".to_string()],
        64,
    )
    .unwrap_err();
    assert!(err.to_string().contains("twice"));
}

#[test]
fn output_key_count_excludes_section_marks() {
    let table = FieldTable::new(
        vec![ask("A"), ask("SECTION").section_mark(), ask("B")],
        vec![],
        64,
    )
    .unwrap();
    assert_eq!(table.output_key_count(), 2);
}

#[test]
fn computed_default_takes_context() {
    let env = ResolvedEnvironment::new();
    let ctx = DefaultContext::new(Path::new("/home/dev/My Site.v2"), &env);
    let default = DefaultValue::computed(|ctx| Value::Text(ctx.dir_slug()));

    assert_eq!(ctx.dir_name(), "My Site.v2");
    assert_eq!(default.evaluate(&ctx), Value::from("My_Site_v2"));
}

#[test]
fn literal_default_is_returned_as_is() {
    let env = ResolvedEnvironment::new();
    let ctx = DefaultContext::new(Path::new("/"), &env);
    assert_eq!(DefaultValue::literal(false).evaluate(&ctx), Value::Flag(false));
}

#[test]
fn strip_non_alphanumerics_collapses_runs() {
    assert_eq!(strip_non_alphanumerics("my--site.com"), "my_site_com");
    assert_eq!(strip_non_alphanumerics("already_ok_1"), "already_ok_1");
}

#[test]
fn value_flag_interpretation() {
    assert!(Value::from("yes").as_flag());
    assert!(Value::from("1").as_flag());
    assert!(!Value::from("").as_flag());
    assert!(!Value::from("no").as_flag());
    assert!(Value::Flag(true).as_flag());
}

#[test]
fn requires_compares_typed_values() {
    let mut env = ResolvedEnvironment::new();
    env.set("MULTISITE", true);

    let requires = Requires {
        key: "MULTISITE".to_string(),
        value: Value::Flag(true),
    };
    assert!(requires.is_met(&env));

    env.set("MULTISITE", "true");
    assert!(!requires.is_met(&env));
}

#[test]
fn question_type_display_matches_config_names() {
    assert_eq!(QuestionType::AskAndHideAnswer.to_string(), "ask_and_hide_answer");
    assert_eq!(QuestionType::AskConfirmation.to_string(), "ask_confirmation");
}

#[test]
fn builtin_wordpress_table_is_valid() {
    let table = wordpress_table().unwrap();

    assert_eq!(table.salt_keys().len(), WORDPRESS_SALT_KEYS.len());
    assert_eq!(table.salt_length(), 64);
    assert!(table.get("DB_SECTION").unwrap().section_mark);
    assert!(table.get("WP_HOME").unwrap().after_resolve.is_some());
}
