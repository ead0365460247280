//! Canonical document templates.
//!
//! A template is an ordered list of segments: literal text copied
//! verbatim into every document, and slot references filled per language
//! at render time. One template is shared by every language; only the
//! dictionaries vary, which is what keeps the localized documents
//! structurally identical.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::schema::{Schema, SlotKey, SlotSpec};

/// Bullet prefix used for list slots parsed from template source.
pub const DEFAULT_BULLET: &str = "- ";

/// One ordered piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied into every document unchanged
    Literal(String),

    /// A single-string slot
    Scalar(SlotKey),

    /// A bullet-list slot; each item is prefixed with `bullet`
    List { key: SlotKey, bullet: String },

    /// A markdown table-row slot; every row must be `columns` cells wide
    Table { key: SlotKey, columns: usize },
}

/// Template parsing errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template references a slot the schema does not declare
    #[error("template references undeclared slot '{0}'")]
    UnknownKey(SlotKey),
}

// Slot reference syntax: `{key}` where key is a lowercase identifier.
// Anything else involving braces is literal text.
static SLOT_REF_REGEX: OnceLock<Regex> = OnceLock::new();

fn slot_ref_regex() -> &'static Regex {
    SLOT_REF_REGEX.get_or_init(|| Regex::new(r"\{([a-z][a-z0-9_]*)\}").unwrap())
}

/// An ordered sequence of segments shared across all languages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse template source text against a schema.
    ///
    /// `{key}` marks a slot reference; its mode comes from the schema's
    /// registered spec for that key. A well-formed reference to a key the
    /// schema does not declare fails with `UnknownKey`, which is what
    /// catches template/schema drift once, before any language renders.
    pub fn parse(source: &str, schema: &Schema) -> Result<Template, TemplateError> {
        let mut template = Template::new();
        let mut cursor = 0;

        for captures in slot_ref_regex().captures_iter(source) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            if whole.start() > cursor {
                template.push_literal(&source[cursor..whole.start()]);
            }

            let key = SlotKey::new(name.as_str());
            match schema.get(&key) {
                Some(SlotSpec::Scalar) => {
                    template.push_scalar(key);
                }
                Some(SlotSpec::List) => {
                    template.push_list(key, DEFAULT_BULLET);
                }
                Some(SlotSpec::Table { columns }) => {
                    template.push_table(key, columns);
                }
                None => return Err(TemplateError::UnknownKey(key)),
            }
            cursor = whole.end();
        }

        if cursor < source.len() {
            template.push_literal(&source[cursor..]);
        }

        Ok(template)
    }

    pub fn push_literal(&mut self, text: impl Into<String>) -> &mut Self {
        self.segments.push(Segment::Literal(text.into()));
        self
    }

    pub fn push_scalar(&mut self, key: impl Into<SlotKey>) -> &mut Self {
        self.segments.push(Segment::Scalar(key.into()));
        self
    }

    pub fn push_list(&mut self, key: impl Into<SlotKey>, bullet: impl Into<String>) -> &mut Self {
        self.segments.push(Segment::List {
            key: key.into(),
            bullet: bullet.into(),
        });
        self
    }

    pub fn push_table(&mut self, key: impl Into<SlotKey>, columns: usize) -> &mut Self {
        self.segments.push(Segment::Table {
            key: key.into(),
            columns,
        });
        self
    }

    /// Segments in template order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Slot references and their implied specs, in template order.
    /// Literal segments are skipped.
    pub fn slots(&self) -> impl Iterator<Item = (&SlotKey, SlotSpec)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Literal(_) => None,
            Segment::Scalar(key) => Some((key, SlotSpec::Scalar)),
            Segment::List { key, .. } => Some((key, SlotSpec::List)),
            Segment::Table { key, columns } => Some((key, SlotSpec::Table { columns: *columns })),
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        let mut schema = Schema::new();
        schema.register("title", SlotSpec::Scalar).unwrap();
        schema.register("bullets", SlotSpec::List).unwrap();
        schema
            .register("specs", SlotSpec::Table { columns: 3 })
            .unwrap();
        schema
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_literal_only() {
        let template = Template::parse("plain text, no slots", &Schema::new()).unwrap();

        assert_eq!(
            template.segments(),
            &[Segment::Literal("plain text, no slots".to_string())]
        );
    }

    #[test]
    fn test_parse_resolves_modes_from_schema() {
        let template = Template::parse("# {title}\n{bullets}\n{specs}", &sample_schema()).unwrap();

        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("# ".to_string()),
                Segment::Scalar(SlotKey::from("title")),
                Segment::Literal("\n".to_string()),
                Segment::List {
                    key: SlotKey::from("bullets"),
                    bullet: DEFAULT_BULLET.to_string(),
                },
                Segment::Literal("\n".to_string()),
                Segment::Table {
                    key: SlotKey::from("specs"),
                    columns: 3,
                },
            ]
        );
    }

    #[test]
    fn test_parse_unknown_reference_fails() {
        let err = Template::parse("# {headline}", &sample_schema()).unwrap_err();
        assert_eq!(err, TemplateError::UnknownKey(SlotKey::from("headline")));
    }

    #[test]
    fn test_parse_adjacent_references() {
        let mut schema = Schema::new();
        schema.register("a", SlotSpec::Scalar).unwrap();
        schema.register("b", SlotSpec::Scalar).unwrap();

        let template = Template::parse("{a}{b}", &schema).unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Scalar(SlotKey::from("a")),
                Segment::Scalar(SlotKey::from("b")),
            ]
        );
    }

    #[test]
    fn test_parse_trailing_literal() {
        let template = Template::parse("{title} and more", &sample_schema()).unwrap();

        assert_eq!(
            template.segments(),
            &[
                Segment::Scalar(SlotKey::from("title")),
                Segment::Literal(" and more".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_braces_are_literal() {
        // None of these are well-formed references: uppercase, spaces,
        // empty, unclosed. They pass through as text.
        let template =
            Template::parse("{Title} {not a key} {} {unclosed", &Schema::new()).unwrap();

        assert_eq!(
            template.segments(),
            &[Segment::Literal(
                "{Title} {not a key} {} {unclosed".to_string()
            )]
        );
    }

    #[test]
    fn test_markdown_table_separator_is_literal() {
        let template = Template::parse("|---|---|---|\n{specs}", &sample_schema()).unwrap();

        assert_eq!(template.len(), 2);
        assert!(matches!(&template.segments()[0], Segment::Literal(text) if text.starts_with("|---")));
    }

    // ==================== Builder Tests ====================

    #[test]
    fn test_programmatic_building() {
        let mut template = Template::new();
        template
            .push_literal("# ")
            .push_scalar("title")
            .push_list("bullets", "* ")
            .push_table("specs", 3);

        assert_eq!(template.len(), 4);
        assert!(matches!(
            &template.segments()[2],
            Segment::List { bullet, .. } if bullet == "* "
        ));
    }

    // ==================== Slot Iteration Tests ====================

    #[test]
    fn test_slots_skip_literals_and_keep_order() {
        let template = Template::parse("# {title}\n{bullets}\n{specs}", &sample_schema()).unwrap();

        let slots: Vec<(&str, SlotSpec)> = template
            .slots()
            .map(|(key, spec)| (key.as_str(), spec))
            .collect();

        assert_eq!(
            slots,
            vec![
                ("title", SlotSpec::Scalar),
                ("bullets", SlotSpec::List),
                ("specs", SlotSpec::Table { columns: 3 }),
            ]
        );
    }

    #[test]
    fn test_repeated_reference_appears_twice() {
        let mut schema = Schema::new();
        schema.register("title", SlotSpec::Scalar).unwrap();

        let template = Template::parse("{title} / {title}", &schema).unwrap();
        assert_eq!(template.slots().count(), 2);
    }
}
