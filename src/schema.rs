//! Document schema: the single source of truth for slot keys and shapes.
//!
//! A schema declares every substitution point a template may reference and
//! the shape of the value each language must supply for it. Registration
//! order is preserved and drives the ordering of validation reports, so a
//! report reads in document order rather than alphabetically.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::template::Template;

/// Identifier of one substitution point in the canonical document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SlotKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// Declared shape of the value a dictionary must supply for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSpec {
    /// A single string
    Scalar,

    /// An ordered sequence of strings, one rendered line per item
    List,

    /// An ordered sequence of rows, each exactly `columns` cells wide
    Table { columns: usize },
}

impl fmt::Display for SlotSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSpec::Scalar => f.write_str("scalar"),
            SlotSpec::List => f.write_str("list"),
            SlotSpec::Table { columns } => write!(f, "table({})", columns),
        }
    }
}

/// Schema construction and lookup errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The key is already registered with a different spec
    #[error("slot '{key}' is already registered as {existing}, cannot re-register as {requested}")]
    DuplicateKey {
        key: SlotKey,
        existing: SlotSpec,
        requested: SlotSpec,
    },

    /// The key was never registered
    #[error("unknown slot key '{0}'")]
    UnknownKey(SlotKey),
}

/// Insertion-ordered mapping from slot keys to their declared shapes.
///
/// Lookups are linear scans: schemas hold tens of slots, not thousands,
/// and keeping a plain `Vec` is what preserves registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    slots: Vec<(SlotKey, SlotSpec)>,
}

impl Schema {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Register a slot.
    ///
    /// Re-registering a key with the identical spec is a no-op, so schemas
    /// can be unioned from several templates that share slots. A different
    /// spec for an existing key is rejected with `DuplicateKey`.
    pub fn register(
        &mut self,
        key: impl Into<SlotKey>,
        spec: SlotSpec,
    ) -> Result<(), SchemaError> {
        let key = key.into();
        match self.lookup(&key) {
            Some(existing) if existing == spec => Ok(()),
            Some(existing) => Err(SchemaError::DuplicateKey {
                key,
                existing,
                requested: spec,
            }),
            None => {
                self.slots.push((key, spec));
                Ok(())
            }
        }
    }

    /// Spec for a key, or `UnknownKey` if it was never registered.
    pub fn spec_for(&self, key: &SlotKey) -> Result<SlotSpec, SchemaError> {
        self.lookup(key)
            .ok_or_else(|| SchemaError::UnknownKey(key.clone()))
    }

    /// Non-failing lookup.
    pub fn get(&self, key: &SlotKey) -> Option<SlotSpec> {
        self.lookup(key)
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.lookup(key).is_some()
    }

    /// Keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &SlotKey> {
        self.slots.iter().map(|(key, _)| key)
    }

    /// `(key, spec)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, SlotSpec)> {
        self.slots.iter().map(|(key, spec)| (key, *spec))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Derive a schema from the union of every slot referenced by the
    /// given templates.
    ///
    /// Fails with `DuplicateKey` if two templates imply different specs
    /// for the same key.
    pub fn from_templates(templates: &[&Template]) -> Result<Self, SchemaError> {
        let mut schema = Schema::new();
        for template in templates {
            for (key, spec) in template.slots() {
                schema.register(key.clone(), spec)?;
            }
        }
        Ok(schema)
    }

    fn lookup(&self, key: &SlotKey) -> Option<SlotSpec> {
        self.slots
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, spec)| *spec)
    }
}
