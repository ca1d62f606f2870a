use serde::Serialize;

/// Built-in field kinds a custom field can declare itself equivalent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum BaseField {
    #[serde(rename = "URLField")]
    Url,
}

impl BaseField {
    /// Column type a migration generator emits for this kind.
    #[must_use]
    pub fn column_type(self, max_length: usize) -> String {
        match self {
            Self::Url => format!("varchar({max_length})"),
        }
    }
}

/// Tells a schema-migration tool to treat every type whose path matches
/// `pattern` exactly like `base_field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntrospectionRule {
    pattern: String,
    base_field: BaseField,
    max_length: usize,
    #[serde(skip)]
    prefix: String,
}

impl IntrospectionRule {
    #[must_use]
    pub fn new(
        module_path: &str,
        type_name: &str,
        base_field: BaseField,
        max_length: usize,
    ) -> Self {
        let prefix = format!("{module_path}::{type_name}");
        Self {
            pattern: format!("^{}", regex::escape(&prefix)),
            base_field,
            max_length,
            prefix,
        }
    }

    /// Anchored regex over type paths, as handed to the migration tool.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn base_field(&self) -> BaseField {
        self.base_field
    }

    /// Whether a type path is covered by this rule.
    #[must_use]
    pub fn matches(&self, type_path: &str) -> bool {
        type_path.starts_with(&self.prefix)
    }

    #[must_use]
    pub fn column_type(&self) -> String {
        self.base_field.column_type(self.max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn rule() -> IntrospectionRule {
        IntrospectionRule::new("media.fields", "OEmbedField", BaseField::Url, 200)
    }

    #[test]
    fn pattern_escapes_module_path() {
        let rule = rule();
        assert_eq!(rule.pattern(), r"^media\.fields::OEmbedField");

        let re = Regex::new(rule.pattern()).unwrap();
        assert!(re.is_match("media.fields::OEmbedField"));
        assert!(!re.is_match("mediaXfields::OEmbedField"));
    }

    #[test]
    fn matches_agrees_with_pattern() {
        let rule = rule();
        assert!(rule.matches("media.fields::OEmbedField"));
        assert!(!rule.matches("other::media.fields::OEmbedField"));
        assert!(!rule.matches("media.fields::URLField"));
    }

    #[test]
    fn behaves_like_url_column() {
        assert_eq!(rule().column_type(), "varchar(200)");
    }

    #[test]
    fn serializes_for_migration_tool() {
        let json = serde_json::to_value(rule()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pattern": r"^media\.fields::OEmbedField",
                "base_field": "URLField",
                "max_length": 200,
            })
        );
    }
}
