//! Dictionary validation against the document schema.
//!
//! Validation never fails: every finding is data in the returned report.
//! Reports drive the missing-key policy in the driver and the drift
//! output of the `check` binary.

use serde::Serialize;

use crate::i18n::dictionary::{Dictionary, ValueKind};
use crate::schema::{Schema, SlotKey, SlotSpec};

/// One value present under the right key but with the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindMismatch {
    pub key: SlotKey,
    pub expected: SlotSpec,
    pub actual: ValueKind,
}

/// Findings from validating one language's dictionary.
///
/// `missing` and `mismatched` follow schema registration order; `unknown`
/// follows dictionary insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Schema keys the dictionary has no value for
    pub missing: Vec<SlotKey>,

    /// Values whose shape conflicts with the schema
    pub mismatched: Vec<KindMismatch>,

    /// Dictionary keys the schema does not declare (informational)
    pub unknown: Vec<SlotKey>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the dictionary can satisfy every schema slot. Unknown
    /// keys do not block completeness.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.mismatched.is_empty()
    }

    /// Check if the report has unknown keys
    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }

    /// Check if the report is clean (complete and no unknown keys)
    pub fn is_clean(&self) -> bool {
        self.is_complete() && !self.has_unknown()
    }

    /// Number of blocking findings (missing plus mismatched).
    pub fn blocking_count(&self) -> usize {
        self.missing.len() + self.mismatched.len()
    }
}

/// Validator for per-language dictionaries.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Compare one dictionary against the schema.
    ///
    /// This function checks that:
    /// - every schema key has a value in the dictionary
    /// - every value's shape matches the key's declared spec
    /// - dictionary keys absent from the schema are surfaced as unknown
    ///
    /// Table column counts are deliberately not checked; row arity is
    /// enforced at render time.
    pub fn validate(schema: &Schema, dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (key, spec) in schema.iter() {
            match dictionary.get(key) {
                None => report.missing.push(key.clone()),
                Some(value) if !value.matches(spec) => report.mismatched.push(KindMismatch {
                    key: key.clone(),
                    expected: spec,
                    actual: value.kind(),
                }),
                Some(_) => {}
            }
        }

        for key in dictionary.keys() {
            if !schema.contains(key) {
                report.unknown.push(key.clone());
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary::SlotValue;

    fn sample_schema() -> Schema {
        let mut schema = Schema::new();
        schema.register("title", SlotSpec::Scalar).unwrap();
        schema.register("bullets", SlotSpec::List).unwrap();
        schema
            .register("specs", SlotSpec::Table { columns: 3 })
            .unwrap();
        schema
    }

    fn complete_dictionary() -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary.insert("title", SlotValue::Scalar("X".to_string()));
        dictionary.insert(
            "bullets",
            SlotValue::List(vec!["a".to_string(), "b".to_string()]),
        );
        dictionary.insert(
            "specs",
            SlotValue::Table(vec![vec![
                "RAM".to_string(),
                "8GB".to_string(),
                "high".to_string(),
            ]]),
        );
        dictionary
    }

    // ==================== Completeness Tests ====================

    #[test]
    fn test_complete_dictionary_is_clean() {
        let report = DictionaryValidator::validate(&sample_schema(), &complete_dictionary());

        assert!(report.is_complete());
        assert!(report.is_clean());
        assert!(report.missing.is_empty());
        assert!(report.mismatched.is_empty());
        assert!(report.unknown.is_empty());
    }

    #[test]
    fn test_single_missing_key_reported_exactly_once() {
        // Everything except "title"
        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "bullets",
            SlotValue::List(vec!["a".to_string(), "b".to_string()]),
        );
        dictionary.insert(
            "specs",
            SlotValue::Table(vec![vec![
                "RAM".to_string(),
                "8GB".to_string(),
                "high".to_string(),
            ]]),
        );

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);

        assert_eq!(report.missing, vec![SlotKey::from("title")]);
        assert!(report.mismatched.is_empty());
        assert!(report.unknown.is_empty());
        assert!(!report.is_complete());
        assert_eq!(report.blocking_count(), 1);
    }

    #[test]
    fn test_empty_dictionary_reports_all_keys_in_schema_order() {
        let report = DictionaryValidator::validate(&sample_schema(), &Dictionary::new());

        let missing: Vec<&str> = report.missing.iter().map(SlotKey::as_str).collect();
        assert_eq!(missing, vec!["title", "bullets", "specs"]);
    }

    // ==================== Kind Mismatch Tests ====================

    #[test]
    fn test_list_where_scalar_is_mismatch_not_missing() {
        let mut dictionary = complete_dictionary();
        dictionary.insert("title", SlotValue::List(vec!["X".to_string()]));

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);

        assert!(report.missing.is_empty());
        assert_eq!(
            report.mismatched,
            vec![KindMismatch {
                key: SlotKey::from("title"),
                expected: SlotSpec::Scalar,
                actual: ValueKind::List,
            }]
        );
    }

    #[test]
    fn test_scalar_where_list_is_mismatch() {
        let mut dictionary = complete_dictionary();
        dictionary.insert("bullets", SlotValue::Scalar("not a list".to_string()));

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);

        assert_eq!(report.mismatched.len(), 1);
        assert_eq!(report.mismatched[0].key, SlotKey::from("bullets"));
        assert_eq!(report.mismatched[0].actual, ValueKind::Scalar);
    }

    #[test]
    fn test_table_arity_is_not_a_validation_finding() {
        let mut dictionary = complete_dictionary();
        // Two columns where the schema wants three; kinds still match.
        dictionary.insert(
            "specs",
            SlotValue::Table(vec![vec!["RAM".to_string(), "8GB".to_string()]]),
        );

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);
        assert!(report.is_complete());
    }

    #[test]
    fn test_mismatches_follow_schema_order() {
        let mut dictionary = Dictionary::new();
        // Inserted in the reverse of schema order
        dictionary.insert("specs", SlotValue::Scalar("x".to_string()));
        dictionary.insert("bullets", SlotValue::Scalar("y".to_string()));
        dictionary.insert("title", SlotValue::Scalar("z".to_string()));

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);

        let mismatched: Vec<&str> = report
            .mismatched
            .iter()
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(mismatched, vec!["bullets", "specs"]);
    }

    // ==================== Unknown Key Tests ====================

    #[test]
    fn test_unknown_keys_do_not_block_completeness() {
        let mut dictionary = complete_dictionary();
        dictionary.insert("legacy_note", SlotValue::Scalar("old".to_string()));

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);

        assert!(report.is_complete());
        assert!(!report.is_clean());
        assert_eq!(report.unknown, vec![SlotKey::from("legacy_note")]);
    }

    #[test]
    fn test_unknown_keys_follow_dictionary_order() {
        let mut dictionary = complete_dictionary();
        dictionary.insert("zz_extra", SlotValue::Scalar("1".to_string()));
        dictionary.insert("aa_extra", SlotValue::Scalar("2".to_string()));

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);

        let unknown: Vec<&str> = report.unknown.iter().map(SlotKey::as_str).collect();
        assert_eq!(unknown, vec!["zz_extra", "aa_extra"]);
    }

    // ==================== Report Shape Tests ====================

    #[test]
    fn test_report_serializes_findings() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("title", SlotValue::List(vec![]));

        let report = DictionaryValidator::validate(&sample_schema(), &dictionary);
        let json = serde_json::to_string(&report).expect("serialize");

        assert!(json.contains("\"missing\""));
        assert!(json.contains("\"mismatched\""));
        assert!(json.contains("\"bullets\""));
        assert!(json.contains("\"expected\""));
    }

    #[test]
    fn test_report_new_is_complete() {
        let report = ValidationReport::new();
        assert!(report.is_complete());
        assert!(report.is_clean());
        assert_eq!(report.blocking_count(), 0);
    }
}
