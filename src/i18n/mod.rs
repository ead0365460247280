//! Internationalization (i18n) module for multi-language support.
//!
//! Language metadata, per-language dictionaries, and dictionary
//! validation live here. The document side (schema, template, renderer)
//! consumes these types but contains no language-specific logic of its
//! own.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language values validated against the registry
//! - `dictionary`: Per-language slot values, insertion-ordered
//! - `validator`: Dictionary-against-schema drift detection
//!
//! # Example
//!
//! ```rust,ignore
//! use readme_localizer::i18n::{Language, LanguageRegistry};
//!
//! // Get canonical language (English)
//! let canonical = Language::canonical();
//!
//! // Create language from code
//! let vietnamese = Language::from_code("vi")?;
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod dictionary;
mod language;
mod registry;
mod validator;

pub use dictionary::{Dictionary, SlotValue, ValueKind};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{DictionaryValidator, KindMismatch, ValidationReport};
