//! The bundled document: one canonical README structure shared by every
//! language. Locale files fill its slots; the cross-language link table is
//! computed here and injected at run time.

use crate::i18n::{Dictionary, Language, SlotValue};
use crate::schema::{Schema, SlotSpec};
use crate::sink;
use crate::template::{Template, TemplateError};

/// Canonical README template, embedded at compile time.
pub const README_TEMPLATE: &str = include_str!("../templates/readme.tmpl");

/// Slot holding the generated cross-language link table. Filled by
/// [`inject_language_links`], never by locale files.
pub const LANGUAGE_LINKS_KEY: &str = "language_links";

/// Declares every slot the bundled README uses, in document order.
pub fn schema() -> Schema {
    let slots = [
        ("title", SlotSpec::Scalar),
        ("subtitle", SlotSpec::Scalar),
        ("tagline", SlotSpec::Scalar),
        (LANGUAGE_LINKS_KEY, SlotSpec::Scalar),
        ("audience_heading", SlotSpec::Scalar),
        ("audience", SlotSpec::List),
        ("features_heading", SlotSpec::Scalar),
        ("features", SlotSpec::List),
        ("platforms_heading", SlotSpec::Scalar),
        ("platform_header", SlotSpec::Scalar),
        ("min_version_header", SlotSpec::Scalar),
        ("status_header", SlotSpec::Scalar),
        ("platforms", SlotSpec::Table { columns: 3 }),
        ("stack_heading", SlotSpec::Scalar),
        ("component_header", SlotSpec::Scalar),
        ("purpose_header", SlotSpec::Scalar),
        ("stack", SlotSpec::Table { columns: 2 }),
        ("license_note", SlotSpec::Scalar),
    ];

    let mut schema = Schema::new();
    for (key, spec) in slots {
        schema
            .register(key, spec)
            .expect("bundled schema slots are distinct");
    }
    schema
}

/// Parses the bundled template against `schema`.
pub fn template(schema: &Schema) -> Result<Template, TemplateError> {
    Template::parse(README_TEMPLATE, schema)
}

/// Builds the cross-language navigation table for `languages`.
///
/// Four flag-and-link cells per row, padded with empty cells so every row is
/// the same width.
pub fn language_links(languages: &[Language]) -> String {
    let cells: Vec<String> = languages
        .iter()
        .map(|language| {
            format!(
                "{} [{}]({})",
                language.flag(),
                language.native_name(),
                sink::output_file_name(*language)
            )
        })
        .collect();

    let mut lines = vec!["| | | | |".to_string(), "|---|---|---|---|".to_string()];
    for chunk in cells.chunks(4) {
        let mut row = chunk.to_vec();
        row.resize(4, String::new());
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.join("\n")
}

/// Computes the link table for every enabled language and inserts it into
/// each dictionary under [`LANGUAGE_LINKS_KEY`].
///
/// The table always covers the full known-language set, not just the
/// languages in the run, so a partial run still links the whole family.
pub fn inject_language_links(dictionaries: &mut [(Language, Dictionary)]) {
    let links = language_links(&Language::all_enabled());
    for (_, dictionary) in dictionaries.iter_mut() {
        dictionary.insert(LANGUAGE_LINKS_KEY, SlotValue::Scalar(links.clone()));
    }
}
