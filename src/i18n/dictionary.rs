//! Per-language translation dictionaries.
//!
//! A dictionary maps slot keys to the values one language supplies for
//! them. Insertion order is preserved so that unknown-key reporting
//! follows the order keys appear in the source file.

use serde::Serialize;
use std::fmt;

use crate::schema::{SlotKey, SlotSpec};

/// A value supplied by one language for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SlotValue {
    Scalar(String),
    List(Vec<String>),
    Table(Vec<Vec<String>>),
}

impl SlotValue {
    /// Runtime shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            SlotValue::Scalar(_) => ValueKind::Scalar,
            SlotValue::List(_) => ValueKind::List,
            SlotValue::Table(_) => ValueKind::Table,
        }
    }

    /// Whether this value's shape satisfies the declared spec.
    ///
    /// Table column counts are not checked here; arity is enforced at
    /// render time, row by row.
    pub fn matches(&self, spec: SlotSpec) -> bool {
        matches!(
            (self, spec),
            (SlotValue::Scalar(_), SlotSpec::Scalar)
                | (SlotValue::List(_), SlotSpec::List)
                | (SlotValue::Table(_), SlotSpec::Table { .. })
        )
    }
}

/// Shape of a `SlotValue`, reported when it conflicts with the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Scalar,
    List,
    Table,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar => f.write_str("scalar"),
            ValueKind::List => f.write_str("list"),
            ValueKind::Table => f.write_str("table"),
        }
    }
}

/// Insertion-ordered mapping from slot keys to one language's values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(SlotKey, SlotValue)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value. Re-inserting an existing key replaces its value in
    /// place, keeping the key's original position.
    pub fn insert(&mut self, key: impl Into<SlotKey>, value: SlotValue) {
        let key = key.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &SlotKey) -> Option<&SlotValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &SlotKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, &SlotValue)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Insertion Tests ====================

    #[test]
    fn test_insert_and_get() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("title", SlotValue::Scalar("X".to_string()));

        assert_eq!(
            dictionary.get(&SlotKey::from("title")),
            Some(&SlotValue::Scalar("X".to_string()))
        );
        assert!(dictionary.get(&SlotKey::from("missing")).is_none());
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("a", SlotValue::Scalar("1".to_string()));
        dictionary.insert("b", SlotValue::Scalar("2".to_string()));
        dictionary.insert("a", SlotValue::Scalar("updated".to_string()));

        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.get(&SlotKey::from("a")),
            Some(&SlotValue::Scalar("updated".to_string()))
        );

        // The overwritten key keeps its original position
        let keys: Vec<&str> = dictionary.keys().map(SlotKey::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_keys_follow_insertion_order() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("zebra", SlotValue::Scalar("z".to_string()));
        dictionary.insert("apple", SlotValue::List(vec![]));
        dictionary.insert("mango", SlotValue::Table(vec![]));

        let keys: Vec<&str> = dictionary.keys().map(SlotKey::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    // ==================== Kind Tests ====================

    #[test]
    fn test_value_kind() {
        assert_eq!(
            SlotValue::Scalar("x".to_string()).kind(),
            ValueKind::Scalar
        );
        assert_eq!(SlotValue::List(vec![]).kind(), ValueKind::List);
        assert_eq!(SlotValue::Table(vec![]).kind(), ValueKind::Table);
    }

    #[test]
    fn test_matches_same_kind() {
        assert!(SlotValue::Scalar("x".to_string()).matches(SlotSpec::Scalar));
        assert!(SlotValue::List(vec![]).matches(SlotSpec::List));
        assert!(SlotValue::Table(vec![]).matches(SlotSpec::Table { columns: 3 }));
    }

    #[test]
    fn test_matches_rejects_other_kinds() {
        let list = SlotValue::List(vec!["a".to_string()]);
        assert!(!list.matches(SlotSpec::Scalar));
        assert!(!list.matches(SlotSpec::Table { columns: 2 }));
    }

    #[test]
    fn test_matches_ignores_table_arity() {
        // Rows narrower than the declared column count still match by
        // kind; arity is a render-time concern.
        let table = SlotValue::Table(vec![vec!["a".to_string()]]);
        assert!(table.matches(SlotSpec::Table { columns: 3 }));
    }

    #[test]
    fn test_value_kind_display() {
        assert_eq!(ValueKind::Scalar.to_string(), "scalar");
        assert_eq!(ValueKind::List.to_string(), "list");
        assert_eq!(ValueKind::Table.to_string(), "table");
    }
}
