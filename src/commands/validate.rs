//! @acp:module "Validate Command"
//! @acp:summary "Validate every niche in a niche dictionary"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::niche::NicheCatalog;

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Niche dictionary file
    pub niches: PathBuf,
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let catalog = NicheCatalog::from_json(&options.niches)
        .with_context(|| format!("failed to load {}", options.niches.display()))?;
    let failures = catalog.validate();

    if failures.is_empty() {
        println!(
            "{} {} niche(s) in {} are valid",
            style("✓").green(),
            catalog.len(),
            options.niches.display()
        );
        return Ok(());
    }

    for (key, error) in &failures {
        eprintln!("{} {}: {}", style("✗").red(), style(key).bold(), error);
    }
    eprintln!(
        "\n{} of {} niche(s) failed validation",
        failures.len(),
        catalog.len()
    );
    std::process::exit(1);
}
