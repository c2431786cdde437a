//! `${NAME}` placeholder substitution for computed defaults and derived values.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Placeholder for the project directory name.
pub const DIR_NAME: &str = "dir_name";

/// Placeholder for the directory name with non-alphanumerics replaced by `_`.
pub const DIR_SLUG: &str = "dir_slug";

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid placeholder regex")
});

/// A string with `${NAME}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    placeholders: Vec<String>,
}

impl Template {
    pub fn parse(raw: &str) -> Self {
        let placeholders = PLACEHOLDER_REGEX
            .captures_iter(raw)
            .map(|caps| caps[1].to_string())
            .collect();

        Self {
            raw: raw.to_string(),
            placeholders,
        }
    }

    /// Names referenced, in order of appearance.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Replace each placeholder with `lookup(name)`.
    pub fn render<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> String,
    {
        PLACEHOLDER_REGEX
            .replace_all(&self.raw, |caps: &Captures<'_>| lookup(&caps[1]))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_placeholders() {
        let template = Template::parse("${WP_HOME}/wp/${dir_slug}");
        assert_eq!(template.placeholders(), ["WP_HOME", "dir_slug"]);
    }

    #[test]
    fn renders_with_lookup() {
        let template = Template::parse("http://${dir_name}.test:${PORT}");
        let rendered = template.render(|name| match name {
            "dir_name" => "shop".to_string(),
            _ => "8080".to_string(),
        });
        assert_eq!(rendered, "http://shop.test:8080");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let template = Template::parse("plain $HOME {x}");
        assert!(template.placeholders().is_empty());
        assert_eq!(template.render(|_| unreachable!()), "plain $HOME {x}");
    }
}
