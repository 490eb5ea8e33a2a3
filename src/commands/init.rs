//! @acp:module "Init Command"
//! @acp:summary "Initialize a new coursegen project"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `coursegen init`: writes the config file and a starter
//! niches.json seeded with the built-in niches.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::{Config, CONFIG_FILE};
use crate::niche::NicheCatalog;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite existing files without asking
    pub force: bool,
    /// Skip interactive prompts; existing files are kept
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config = Config::default();
    let config_path = PathBuf::from(CONFIG_FILE);

    if should_write(&config_path, &options)? {
        config.save(&config_path)?;
        println!("{} Created {}", style("✓").green(), config_path.display());
    }

    if should_write(&config.niches, &options)? {
        NicheCatalog::builtin().write_json(&config.niches)?;
        println!(
            "{} Created {} with built-in niches",
            style("✓").green(),
            config.niches.display()
        );
    }

    println!("\n{}", style("Next steps:").bold());
    println!("  1. Edit {} to describe your niches", config.niches.display());
    println!(
        "  2. Run {} to generate courses",
        style("coursegen generate <niche>").cyan()
    );

    Ok(())
}

fn should_write(path: &Path, options: &InitOptions) -> Result<bool> {
    if !path.exists() || options.force {
        return Ok(true);
    }
    if options.yes {
        println!(
            "{} {} already exists, skipping (use --force to overwrite)",
            style("!").yellow(),
            path.display()
        );
        return Ok(false);
    }

    let overwrite = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()?;
    Ok(overwrite)
}
