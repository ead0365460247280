use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use readme_localizer::{config, document, driver, sink, sources};

fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("readme_localizer=info".parse()?),
        )
        .init();

    info!("Starting localized document generation");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Step 1: Build the canonical document structure
    let schema = document::schema();
    let template = document::template(&schema)?;
    info!("Canonical structure has {} slots", schema.len());

    // Step 2: Load per-language dictionaries
    info!("Loading dictionaries from {}", config.locales_dir);
    let mut dictionaries = sources::load_locales_dir(Path::new(&config.locales_dir), &schema)?;

    if let Some(codes) = &config.languages {
        dictionaries.retain(|(language, _)| codes.iter().any(|code| code == language.code()));
    }
    if dictionaries.is_empty() {
        warn!("No dictionaries to process, nothing to generate");
        return Ok(());
    }
    info!("Loaded {} dictionaries", dictionaries.len());

    // Step 3: Inject the cross-language link table
    document::inject_language_links(&mut dictionaries);

    // Step 4: Validate and render every language
    let report = driver::generate_all(&schema, &template, &dictionaries, &config.policy)?;

    // Step 5: Write documents and the run report
    let written = sink::write_documents(&report, Path::new(&config.output_dir))?;
    sink::write_report(&report, Path::new(&config.output_dir))?;

    info!("Wrote {} documents to {}", written.len(), config.output_dir);
    Ok(())
}
