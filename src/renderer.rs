//! Rendering: merge one template with one language's dictionary.
//!
//! Rendering is a pure function of its inputs. The same template and
//! dictionary always produce byte-identical output; nothing here consults
//! the system locale, the clock, or any global state.

use thiserror::Error;
use tracing::debug;

use crate::i18n::{Dictionary, SlotValue};
use crate::schema::{SlotKey, SlotSpec};
use crate::template::{Segment, Template};

/// Render-time failures. Both arise from one language's data, so the
/// driver can recover per its policy without touching other languages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No usable value for a slot: absent, or present with the wrong shape
    #[error("no usable value for slot '{key}' ({expected} expected)")]
    MissingSlot { key: SlotKey, expected: SlotSpec },

    /// A table row's width differs from the declared column count
    #[error("table '{key}' row {row} has {actual} columns, expected {expected}")]
    RowArity {
        key: SlotKey,
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// How render treats slots without a usable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    placeholder: Option<String>,
}

impl RenderOptions {
    /// Fail on the first unusable slot. This is the default.
    pub fn strict() -> Self {
        Self { placeholder: None }
    }

    /// Render unusable slots as `marker` instead of failing. A `{key}`
    /// occurrence in the marker is replaced with the slot key, so markers
    /// like `[MISSING: {key}]` point at the offending entry.
    pub fn best_effort(marker: impl Into<String>) -> Self {
        Self {
            placeholder: Some(marker.into()),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.placeholder.is_none()
    }
}

/// A rendered document: one immutable text block per template segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    blocks: Vec<String>,
}

impl RenderedDocument {
    /// Blocks in template order, one per segment.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// The full document text: all blocks concatenated verbatim.
    pub fn text(&self) -> String {
        self.blocks.concat()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Render with strict missing-slot handling.
pub fn render(
    template: &Template,
    dictionary: &Dictionary,
) -> Result<RenderedDocument, RenderError> {
    render_with(template, dictionary, &RenderOptions::strict())
}

/// Render one template against one language's dictionary.
///
/// A value present under the key but with the wrong shape for the segment
/// is treated exactly like an absent value: strict mode fails with
/// `MissingSlot`, best-effort mode renders the placeholder. Shape
/// conflicts get their richer diagnosis from the validator; render only
/// has to refuse to use them.
pub fn render_with(
    template: &Template,
    dictionary: &Dictionary,
    options: &RenderOptions,
) -> Result<RenderedDocument, RenderError> {
    let mut blocks = Vec::with_capacity(template.segments().len());

    for segment in template.segments() {
        let block = match segment {
            Segment::Literal(text) => text.clone(),
            Segment::Scalar(key) => match dictionary.get(key) {
                Some(SlotValue::Scalar(value)) => value.clone(),
                _ => fallback(key, SlotSpec::Scalar, options)?,
            },
            Segment::List { key, bullet } => match dictionary.get(key) {
                Some(SlotValue::List(items)) => render_list(items, bullet),
                _ => fallback(key, SlotSpec::List, options)?,
            },
            Segment::Table { key, columns } => match dictionary.get(key) {
                Some(SlotValue::Table(rows)) => match render_table(key, rows, *columns) {
                    Ok(block) => block,
                    Err(err) => match &options.placeholder {
                        Some(marker) => {
                            debug!("degrading table '{}' to placeholder: {}", key, err);
                            substitute(marker, key)
                        }
                        None => return Err(err),
                    },
                },
                _ => fallback(key, SlotSpec::Table { columns: *columns }, options)?,
            },
        };
        blocks.push(block);
    }

    Ok(RenderedDocument { blocks })
}

/// List block: one line per item, joined without a trailing newline.
/// An empty list renders as an empty block.
fn render_list(items: &[String], bullet: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", bullet, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Table block: one `| a | b | c |` line per row, joined without a
/// trailing newline. Every row must match the declared column count.
fn render_table(
    key: &SlotKey,
    rows: &[Vec<String>],
    columns: usize,
) -> Result<String, RenderError> {
    let mut lines = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if row.len() != columns {
            return Err(RenderError::RowArity {
                key: key.clone(),
                row: index,
                expected: columns,
                actual: row.len(),
            });
        }
        lines.push(format!("| {} |", row.join(" | ")));
    }
    Ok(lines.join("\n"))
}

fn fallback(
    key: &SlotKey,
    expected: SlotSpec,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match &options.placeholder {
        Some(marker) => {
            debug!("rendering placeholder for slot '{}'", key);
            Ok(substitute(marker, key))
        }
        None => Err(RenderError::MissingSlot {
            key: key.clone(),
            expected,
        }),
    }
}

fn substitute(marker: &str, key: &SlotKey) -> String {
    marker.replace("{key}", key.as_str())
}
