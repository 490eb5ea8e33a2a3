//! @acp:module "List Command"
//! @acp:summary "List available niches"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::niche::NicheCatalog;

/// Options for the list command
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Niche dictionary file
    pub niches: PathBuf,
}

/// Execute the list command
pub fn execute_list(options: ListOptions) -> Result<()> {
    let catalog = NicheCatalog::load_or_builtin(&options.niches)
        .with_context(|| format!("failed to load {}", options.niches.display()))?;

    if catalog.is_empty() {
        println!("{} No niches defined", style("⚠").yellow());
        return Ok(());
    }

    println!("Available niches ({}):\n", catalog.len());
    for (key, niche) in catalog.iter() {
        println!("  {} - {}", style(key).bold(), niche.name);
        println!("    {} | {}", niche.category, style(&niche.target_audience).dim());
    }

    Ok(())
}
