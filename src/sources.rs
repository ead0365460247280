//! Dictionary loading from JSON locale files.
//!
//! Each enabled language may ship a `locales/<code>.json` file: a single JSON
//! object mapping slot keys to values. Strings become scalars, arrays of
//! strings become lists, arrays of arrays become tables. Key order in the
//! file is preserved, so validation findings for unknown keys come out in
//! file order.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::{Dictionary, Language, LanguageRegistry, SlotValue};
use crate::schema::{Schema, SlotKey, SlotSpec};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a single JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("{}: key '{key}': {detail}", path.display())]
    InvalidValue {
        path: PathBuf,
        key: String,
        detail: String,
    },
}

/// Reads one locale file into a [`Dictionary`], keeping the file's key order.
///
/// The schema is consulted only to disambiguate empty arrays: `[]` under a
/// table slot loads as an empty table, anywhere else as an empty list.
pub fn load_dictionary(path: &Path, schema: &Schema) -> Result<Dictionary, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: Value = serde_json::from_str(&raw).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Object(entries) = parsed else {
        return Err(SourceError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let mut dictionary = Dictionary::new();
    for (key, value) in &entries {
        let spec = schema.get(&SlotKey::from(key.as_str()));
        let slot = convert_value(path, key, value, spec)?;
        dictionary.insert(key.as_str(), slot);
    }
    Ok(dictionary)
}

/// Loads every locale file that matches an enabled language.
///
/// Results follow registry order regardless of directory listing order, so
/// repeated runs over the same files produce the same sequence. Files whose
/// stem is not a known language code are ignored with a warning.
pub fn load_locales_dir(
    dir: &Path,
    schema: &Schema,
) -> Result<Vec<(Language, Dictionary)>, SourceError> {
    let registry = LanguageRegistry::get();
    let listing = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in listing {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if registry.get_by_code(stem).is_none() {
            warn!(
                "Ignoring {}: no language with code '{}'",
                path.display(),
                stem
            );
        }
    }

    let mut loaded = Vec::new();
    for language in Language::all_enabled() {
        let path = dir.join(format!("{}.json", language.code()));
        if !path.exists() {
            debug!("No dictionary for '{}' in {}", language.code(), dir.display());
            continue;
        }
        let dictionary = load_dictionary(&path, schema)?;
        debug!(
            "Loaded {} entries for '{}' from {}",
            dictionary.len(),
            language.code(),
            path.display()
        );
        loaded.push((language, dictionary));
    }
    Ok(loaded)
}

fn convert_value(
    path: &Path,
    key: &str,
    value: &Value,
    spec: Option<SlotSpec>,
) -> Result<SlotValue, SourceError> {
    match value {
        Value::String(text) => Ok(SlotValue::Scalar(text.clone())),
        Value::Array(items) => convert_array(path, key, items, spec),
        other => Err(invalid(
            path,
            key,
            format!(
                "expected a string or an array, got {}",
                json_type_name(other)
            ),
        )),
    }
}

fn convert_array(
    path: &Path,
    key: &str,
    items: &[Value],
    spec: Option<SlotSpec>,
) -> Result<SlotValue, SourceError> {
    match items.first() {
        None => Ok(match spec {
            Some(SlotSpec::Table { .. }) => SlotValue::Table(Vec::new()),
            _ => SlotValue::List(Vec::new()),
        }),
        Some(Value::String(_)) => {
            let mut list = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let Value::String(text) = item else {
                    return Err(invalid(
                        path,
                        key,
                        format!("item {} is {}, expected a string", index, json_type_name(item)),
                    ));
                };
                list.push(text.clone());
            }
            Ok(SlotValue::List(list))
        }
        Some(Value::Array(_)) => {
            let mut rows = Vec::with_capacity(items.len());
            for (row_index, row) in items.iter().enumerate() {
                let Value::Array(cells) = row else {
                    return Err(invalid(
                        path,
                        key,
                        format!(
                            "row {} is {}, expected an array of strings",
                            row_index,
                            json_type_name(row)
                        ),
                    ));
                };
                let mut converted = Vec::with_capacity(cells.len());
                for (cell_index, cell) in cells.iter().enumerate() {
                    let Value::String(text) = cell else {
                        return Err(invalid(
                            path,
                            key,
                            format!(
                                "row {} cell {} is {}, expected a string",
                                row_index,
                                cell_index,
                                json_type_name(cell)
                            ),
                        ));
                    };
                    converted.push(text.clone());
                }
                rows.push(converted);
            }
            Ok(SlotValue::Table(rows))
        }
        Some(other) => Err(invalid(
            path,
            key,
            format!(
                "array starting with {} is neither a list of strings nor table rows",
                json_type_name(other)
            ),
        )),
    }
}

fn invalid(path: &Path, key: &str, detail: String) -> SourceError {
    SourceError::InvalidValue {
        path: path.to_path_buf(),
        key: key.to_string(),
        detail,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
