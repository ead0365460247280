//! Preview binary - renders one language to stdout without writing files
//!
//! Usage:
//!   cargo run --bin preview            # Preview the canonical language
//!   cargo run --bin preview -- vi      # Preview a specific language
//!
//! Incomplete dictionaries render with inline placeholder markers instead of
//! failing, so translators can see exactly what is left to fill.

use std::path::Path;

use anyhow::{Context, Result};
use readme_localizer::driver::DEFAULT_PLACEHOLDER;
use readme_localizer::i18n::{DictionaryValidator, Language};
use readme_localizer::renderer::{self, RenderOptions};
use readme_localizer::{config, document, sources};

fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("readme_localizer=warn".parse().unwrap()),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let code = args
        .get(1)
        .map(String::as_str)
        .unwrap_or_else(|| Language::canonical().code());
    let language = Language::from_code(code)?;

    let config = config::Config::from_env()?;
    let schema = document::schema();
    let template = document::template(&schema)?;

    let mut dictionaries = sources::load_locales_dir(Path::new(&config.locales_dir), &schema)?;
    document::inject_language_links(&mut dictionaries);

    let (_, dictionary) = dictionaries
        .iter()
        .find(|(candidate, _)| *candidate == language)
        .with_context(|| format!("No dictionary loaded for '{}'", code))?;

    let report = DictionaryValidator::validate(&schema, dictionary);
    let rendered = renderer::render_with(
        &template,
        dictionary,
        &RenderOptions::best_effort(DEFAULT_PLACEHOLDER),
    )?;

    println!();
    println!(
        "--- {} ({}) preview ---",
        language.native_name(),
        language.code()
    );
    println!();
    println!("{}", rendered.text());
    println!("--- End of preview ---");
    if !report.is_complete() {
        println!();
        println!(
            "{} missing, {} wrong shape - marked inline",
            report.missing.len(),
            report.mismatched.len()
        );
    }

    Ok(())
}
