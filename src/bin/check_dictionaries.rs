//! Dictionary check binary - validates every locale file without writing output
//!
//! Usage:
//!   cargo run --bin check                       # Check every locale in LOCALES_DIR
//!   LOCALES_DIR=translations cargo run --bin check
//!
//! Exits non-zero when any language is missing keys or carries wrong-shaped
//! values, so it can gate CI before the generator runs.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use readme_localizer::i18n::DictionaryValidator;
use readme_localizer::{config, document, sources};

fn main() -> Result<ExitCode> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("readme_localizer=warn".parse().unwrap()),
        )
        .init();

    let config = config::Config::from_env()?;
    let schema = document::schema();

    let mut dictionaries = sources::load_locales_dir(Path::new(&config.locales_dir), &schema)?;
    if dictionaries.is_empty() {
        println!("No locale files found in {}", config.locales_dir);
        return Ok(ExitCode::FAILURE);
    }
    document::inject_language_links(&mut dictionaries);

    let mut failed = false;
    for (language, dictionary) in &dictionaries {
        let report = DictionaryValidator::validate(&schema, dictionary);

        if report.is_clean() {
            println!("✅ {} ({}) - complete", language.native_name(), language.code());
            continue;
        }

        if report.is_complete() {
            println!(
                "⚠️  {} ({}) - complete, with unused keys",
                language.native_name(),
                language.code()
            );
        } else {
            println!(
                "❌ {} ({}) - cannot fill the template",
                language.native_name(),
                language.code()
            );
            failed = true;
        }
        for key in &report.missing {
            println!("   missing: {}", key);
        }
        for mismatch in &report.mismatched {
            println!(
                "   wrong shape: {} is {}, schema wants {}",
                mismatch.key, mismatch.actual, mismatch.expected
            );
        }
        for key in &report.unknown {
            println!("   unused key: {}", key);
        }
    }

    println!();
    if failed {
        println!("Some dictionaries cannot fill the template.");
        return Ok(ExitCode::FAILURE);
    }
    println!("All {} dictionaries can fill the template.", dictionaries.len());
    Ok(ExitCode::SUCCESS)
}
