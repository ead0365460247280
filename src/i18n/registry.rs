//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages the
//! generator knows about. It uses a singleton pattern with `OnceLock` to
//! ensure thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language: its code, names, the
/// flag shown in generated cross-links, enabled status, and whether it's
/// the canonical language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "vi", "fil")
    pub code: &'static str,

    /// English name of the language (e.g., "Vietnamese")
    pub name: &'static str,

    /// Native name of the language (e.g., "Tiếng Việt")
    pub native_name: &'static str,

    /// Flag emoji used in generated cross-links
    pub flag: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for generation
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order (canonical first).
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the source language every translation is
    /// measured against. There should be exactly one.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
///
/// English is canonical; the rest are the translation targets the README
/// ships in. Flags and native names appear verbatim in the generated
/// cross-link table.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "vi",
            name: "Vietnamese",
            native_name: "Tiếng Việt",
            flag: "🇻🇳",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "id",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
            flag: "🇮🇩",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            flag: "🇨🇳",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            flag: "🇰🇷",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            flag: "🇯🇵",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            flag: "🇫🇷",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            flag: "🇩🇪",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            flag: "🇪🇸",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "th",
            name: "Thai",
            native_name: "ภาษาไทย",
            flag: "🇹🇭",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ms",
            name: "Malay",
            native_name: "Bahasa Melayu",
            flag: "🇲🇾",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            flag: "🇷🇺",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fil",
            name: "Filipino",
            native_name: "Filipino",
            flag: "🇵🇭",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            flag: "🇧🇷",
            is_canonical: false,
            enabled: true,
        },
    ]
}
