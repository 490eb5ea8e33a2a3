#![forbid(unsafe_code)]
//! Coursegen Command Line Interface

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use coursegen::commands::{
    execute_generate, execute_init, execute_list, execute_validate, GenerateOptions, InitOptions,
    ListOptions, ValidateOptions,
};
use coursegen::config::CONFIG_FILE;
use coursegen::Config;

#[derive(Parser)]
#[command(name = "coursegen")]
#[command(about = "Generate tiered certification courses for a niche")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate courses for a niche
    Generate {
        /// Niche key in the niche dictionary
        niche: String,

        /// Tier to generate (all, mini-diploma, foundation, practitioner-bundle, income-accelerator)
        #[arg(short, long, default_value = "all")]
        level: String,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Niche dictionary file
        #[arg(short, long)]
        niches: Option<PathBuf>,

        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },

    /// List available niches
    List {
        /// Niche dictionary file
        #[arg(short, long)]
        niches: Option<PathBuf>,
    },

    /// Validate a niche dictionary
    Validate {
        /// Niche dictionary file
        #[arg(short, long)]
        niches: Option<PathBuf>,
    },

    /// Initialize a new coursegen project
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    match cli.command {
        Commands::Generate {
            niche,
            level,
            output,
            niches,
            json,
        } => {
            let options = GenerateOptions {
                niche,
                level,
                output,
                niches,
                json,
            };
            execute_generate(options, config)?;
        }

        Commands::List { niches } => {
            execute_list(ListOptions {
                niches: niches.unwrap_or(config.niches),
            })?;
        }

        Commands::Validate { niches } => {
            execute_validate(ValidateOptions {
                niches: niches.unwrap_or(config.niches),
            })?;
        }

        Commands::Init { force, yes } => {
            execute_init(InitOptions { force, yes })?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
