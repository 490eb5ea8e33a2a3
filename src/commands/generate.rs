//! @acp:module "Generate Command"
//! @acp:summary "Generate and save courses for one niche"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `coursegen generate`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::course::TierSelector;
use crate::generate::CourseGenerator;
use crate::niche::NicheCatalog;
use crate::output::{save_courses, CourseSummary};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Niche key to look up
    pub niche: String,
    /// Tier selector (all or one tier name)
    pub level: String,
    /// Output directory (overrides config)
    pub output: Option<PathBuf>,
    /// Niche dictionary (overrides config)
    pub niches: Option<PathBuf>,
    /// Print a JSON summary instead of text
    pub json: bool,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: Config) -> Result<()> {
    let selector: TierSelector = options.level.parse()?;
    let niches_path = options.niches.unwrap_or(config.niches);
    let output_dir = options.output.unwrap_or(config.output);

    let catalog = NicheCatalog::load_or_builtin(&niches_path)
        .with_context(|| format!("failed to load {}", niches_path.display()))?;
    let niche = match catalog.get(&options.niche) {
        Ok(niche) => niche,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            eprintln!("  Available niches:");
            for (key, niche) in catalog.iter() {
                eprintln!("    {} ({})", style(key).cyan(), niche.name);
            }
            std::process::exit(1);
        }
    };

    if !options.json {
        println!(
            "{} Generating {} course(s) for {}...",
            style("→").cyan(),
            selector,
            style(&niche.name).bold()
        );
    }

    let generator = CourseGenerator::new(config.defaults);
    let courses = generator.generate(niche, selector)?;
    let paths = save_courses(&courses, &output_dir)
        .with_context(|| format!("failed to write courses to {}", output_dir.display()))?;
    let summaries: Vec<CourseSummary> = courses.iter().map(CourseSummary::from).collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for (summary, path) in summaries.iter().zip(&paths) {
        println!(
            "\n{} {} {}",
            style("✓").green(),
            style(summary.level.name()).cyan(),
            style(&summary.title).bold()
        );
        println!("  Slug:    {}", summary.slug);
        println!("  Modules: {}", summary.modules);
        println!("  Lessons: {}", summary.lessons);
        println!("  Price:   ${}", summary.price);
        println!("  File:    {}", path.display());
    }

    println!(
        "\n{} {} course(s) written to {}",
        style("✓").green(),
        courses.len(),
        output_dir.display()
    );

    Ok(())
}
