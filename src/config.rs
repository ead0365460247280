use anyhow::{bail, Result};

use crate::driver::{MissingKeyPolicy, DEFAULT_PLACEHOLDER};

#[derive(Debug, Clone)]
pub struct Config {
    // Input
    pub locales_dir: String,

    // Output
    pub output_dir: String,

    // Generation
    pub policy: MissingKeyPolicy,
    pub languages: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let policy_name =
            std::env::var("MISSING_KEY_POLICY").unwrap_or_else(|_| "skip-language".to_string());
        // Only consulted when the policy is best-effort
        let placeholder =
            std::env::var("PLACEHOLDER_MARKER").unwrap_or_else(|_| DEFAULT_PLACEHOLDER.to_string());

        Ok(Self {
            // Input
            locales_dir: std::env::var("LOCALES_DIR").unwrap_or_else(|_| "locales".to_string()),

            // Output
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "dist".to_string()),

            // Generation
            policy: parse_policy(&policy_name, placeholder)?,
            languages: std::env::var("LANGUAGES").ok().map(|raw| {
                raw.split(',')
                    .map(|code| code.trim().to_string())
                    .filter(|code| !code.is_empty())
                    .collect()
            }),
        })
    }
}

fn parse_policy(name: &str, placeholder: String) -> Result<MissingKeyPolicy> {
    match name {
        "skip-language" => Ok(MissingKeyPolicy::SkipLanguage),
        "best-effort" => Ok(MissingKeyPolicy::BestEffort { placeholder }),
        "abort-all" => Ok(MissingKeyPolicy::AbortAll),
        other => bail!(
            "MISSING_KEY_POLICY must be one of skip-language, best-effort, abort-all (got '{}')",
            other
        ),
    }
}
