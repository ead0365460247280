//! Filesystem sink for rendered documents and the run report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::driver::GenerationReport;
use crate::i18n::Language;

/// File name a language's document is written under. The canonical language
/// owns the bare `README.md`; every other language gets a suffixed variant.
pub fn output_file_name(language: Language) -> String {
    if language.is_canonical() {
        "README.md".to_string()
    } else {
        format!("README.{}.md", language.code())
    }
}

/// Writes every rendered document under `out_dir`, returning the written paths
/// in report order.
pub fn write_documents(report: &GenerationReport, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();
    for (language, document) in report.documents() {
        let path = out_dir.join(output_file_name(language));
        let text = document.text();
        fs::write(&path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} ({} bytes)", path.display(), text.len());
        written.push(path);
    }
    Ok(written)
}

/// Serializes the generation report next to the documents as `report.json`.
pub fn write_report(report: &GenerationReport, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let path = out_dir.join("report.json");
    let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{self, MissingKeyPolicy};
    use crate::i18n::{Dictionary, SlotValue};
    use crate::schema::{Schema, SlotSpec};
    use crate::template::Template;

    fn small_report() -> GenerationReport {
        let mut schema = Schema::new();
        schema.register("title", SlotSpec::Scalar).unwrap();
        let template = Template::parse("# {title}\n", &schema).unwrap();

        let mut en = Dictionary::new();
        en.insert("title", SlotValue::Scalar("Hello".to_string()));
        let mut vi = Dictionary::new();
        vi.insert("title", SlotValue::Scalar("Xin chào".to_string()));

        let dictionaries = vec![
            (Language::from_code("en").unwrap(), en),
            (Language::from_code("vi").unwrap(), vi),
        ];
        driver::generate_all(&schema, &template, &dictionaries, &MissingKeyPolicy::SkipLanguage)
            .unwrap()
    }

    // ==================== File Naming Tests ====================

    #[test]
    fn test_canonical_language_owns_bare_readme() {
        assert_eq!(output_file_name(Language::canonical()), "README.md");
    }

    #[test]
    fn test_other_languages_get_suffixed_names() {
        assert_eq!(
            output_file_name(Language::from_code("vi").unwrap()),
            "README.vi.md"
        );
        assert_eq!(
            output_file_name(Language::from_code("fil").unwrap()),
            "README.fil.md"
        );
    }

    // ==================== Write Tests ====================

    #[test]
    fn test_writes_one_file_per_document() {
        let dir = tempfile::tempdir().unwrap();

        let written = write_documents(&small_report(), dir.path()).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("README.md")).unwrap(),
            "# Hello\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("README.vi.md")).unwrap(),
            "# Xin chào\n"
        );
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("docs");

        let written = write_documents(&small_report(), &nested).unwrap();

        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_report_json_is_parseable() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_report(&small_report(), dir.path()).unwrap();

        let raw = fs::read_to_string(path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["outcomes"].as_array().unwrap().len(), 2);
        assert_eq!(json["outcomes"][0]["language"], "en");
    }
}
