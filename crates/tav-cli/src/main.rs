//! CLI frontend for the Taverna rules engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tav",
    about = "Taverna: dice rolling and character build checks",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice notation such as 1d20, d6 or 3d6-1, or a preset by name
    Roll {
        /// Dice notation ([count]d<size>[+|-modifier]) or a preset name
        notation: String,

        /// Label recorded with the roll
        #[arg(short, long)]
        description: Option<String>,

        /// Roll this many times and show the history
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON roll responses instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the built-in dice presets
    Presets,

    /// Show the contents of a reference catalog file
    Catalog {
        /// Catalog JSON file
        file: PathBuf,
    },

    /// Validate a character build submission against a catalog
    Build {
        /// Build submission JSON file
        submission: PathBuf,

        /// Catalog JSON file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Print the character snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            notation,
            description,
            times,
            seed,
            json,
        } => commands::roll::run(&notation, description.as_deref(), times, seed, json),
        Commands::Presets => commands::presets::run(),
        Commands::Catalog { file } => commands::catalog::run(&file),
        Commands::Build {
            submission,
            catalog,
            json,
        } => commands::build::run(&submission, &catalog, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
