//! Multi-language generation driver.
//!
//! Walks an ordered set of per-language dictionaries, validates each against
//! the shared schema, renders the template, and collects every result into a
//! [`GenerationReport`]. What happens to a language that cannot fill the
//! template is decided by the configured [`MissingKeyPolicy`].

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::i18n::{Dictionary, DictionaryValidator, Language, ValidationReport};
use crate::renderer::{self, RenderOptions, RenderedDocument};
use crate::schema::Schema;
use crate::template::Template;

/// Placeholder marker used by `best-effort` runs unless overridden. The
/// `{key}` token is replaced with the unfilled slot key.
pub const DEFAULT_PLACEHOLDER: &str = "[MISSING: {key}]";

/// What to do with a language whose dictionary cannot fully fill the template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MissingKeyPolicy {
    /// Drop the language from the output set and keep going.
    #[default]
    SkipLanguage,
    /// Render anyway, substituting `placeholder` for every unfilled slot.
    BestEffort { placeholder: String },
    /// Fail the entire run on the first language that cannot fill the template.
    AbortAll,
}

/// Errors surfaced by [`generate_all`].
#[derive(Debug, Error)]
pub enum DriverError {
    /// Under [`MissingKeyPolicy::AbortAll`], some language failed validation
    /// or rendering. Carries the first failure in input order.
    #[error("generation aborted: '{}' cannot fill the template", language.code())]
    Aborted {
        language: Language,
        report: ValidationReport,
        render_error: Option<String>,
    },
}

/// How a single language fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Validation passed and the document rendered without substitutions.
    Ok,
    /// Rendered with placeholders under `best-effort`.
    Partial,
    /// No document was produced for this language.
    Skipped,
}

/// Per-language result: validation findings plus the document, if any.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageOutcome {
    pub language: Language,
    pub status: OutcomeStatus,
    pub report: ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_error: Option<String>,
    #[serde(skip)]
    pub document: Option<RenderedDocument>,
}

/// Outcome of a full [`generate_all`] run, one entry per input language in
/// input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub outcomes: Vec<LanguageOutcome>,
}

impl GenerationReport {
    /// Languages that produced a document, paired with it, in input order.
    pub fn documents(&self) -> impl Iterator<Item = (Language, &RenderedDocument)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.document.as_ref().map(|doc| (outcome.language, doc)))
    }

    pub fn document_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.document.is_some()).count()
    }

    pub fn ok_count(&self) -> usize {
        self.count_status(OutcomeStatus::Ok)
    }

    pub fn partial_count(&self) -> usize {
        self.count_status(OutcomeStatus::Partial)
    }

    pub fn skipped_count(&self) -> usize {
        self.count_status(OutcomeStatus::Skipped)
    }

    fn count_status(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

/// Generates a document per language from one shared schema and template.
///
/// Languages are processed in parallel but results are collected back into
/// input order, so the report and any abort decision are deterministic.
pub fn generate_all(
    schema: &Schema,
    template: &Template,
    dictionaries: &[(Language, Dictionary)],
    policy: &MissingKeyPolicy,
) -> Result<GenerationReport, DriverError> {
    let outcomes: Vec<LanguageOutcome> = dictionaries
        .par_iter()
        .map(|(language, dictionary)| generate_one(schema, template, *language, dictionary, policy))
        .collect();

    if *policy == MissingKeyPolicy::AbortAll {
        if let Some(failed) = outcomes.iter().find(|o| o.status != OutcomeStatus::Ok) {
            return Err(DriverError::Aborted {
                language: failed.language,
                report: failed.report.clone(),
                render_error: failed.render_error.clone(),
            });
        }
    }

    let report = GenerationReport { outcomes };
    info!(
        "Generated {} of {} documents ({} complete, {} partial, {} skipped)",
        report.document_count(),
        dictionaries.len(),
        report.ok_count(),
        report.partial_count(),
        report.skipped_count()
    );
    Ok(report)
}

fn generate_one(
    schema: &Schema,
    template: &Template,
    language: Language,
    dictionary: &Dictionary,
    policy: &MissingKeyPolicy,
) -> LanguageOutcome {
    let report = DictionaryValidator::validate(schema, dictionary);

    if report.is_complete() {
        match renderer::render(template, dictionary) {
            Ok(document) => {
                info!("[{}] document rendered ({} blocks)", language.code(), document.len());
                return LanguageOutcome {
                    language,
                    status: OutcomeStatus::Ok,
                    report,
                    render_error: None,
                    document: Some(document),
                };
            }
            Err(err) => {
                warn!("[{}] render failed: {}", language.code(), err);
                return degraded(template, language, dictionary, report, Some(err.to_string()), policy);
            }
        }
    }

    warn!(
        "[{}] dictionary cannot fill the template ({} blocking findings)",
        language.code(),
        report.blocking_count()
    );
    degraded(template, language, dictionary, report, None, policy)
}

/// Fallback path for a language that cannot be rendered cleanly.
fn degraded(
    template: &Template,
    language: Language,
    dictionary: &Dictionary,
    report: ValidationReport,
    render_error: Option<String>,
    policy: &MissingKeyPolicy,
) -> LanguageOutcome {
    if let MissingKeyPolicy::BestEffort { placeholder } = policy {
        match renderer::render_with(template, dictionary, &RenderOptions::best_effort(placeholder)) {
            Ok(document) => {
                info!("[{}] rendered with placeholders", language.code());
                return LanguageOutcome {
                    language,
                    status: OutcomeStatus::Partial,
                    report,
                    render_error,
                    document: Some(document),
                };
            }
            Err(err) => {
                // Placeholder rendering only fails on malformed table rows.
                warn!("[{}] placeholder render failed: {}", language.code(), err);
                return LanguageOutcome {
                    language,
                    status: OutcomeStatus::Skipped,
                    report,
                    render_error: Some(err.to_string()),
                    document: None,
                };
            }
        }
    }

    LanguageOutcome {
        language,
        status: OutcomeStatus::Skipped,
        report,
        render_error,
        document: None,
    }
}
