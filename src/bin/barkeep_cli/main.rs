// ABOUTME: Barkeep CLI - invent cocktails and inspect the ingredient graph from a terminal
// ABOUTME: Dispatches generate, stats, and associates subcommands over a locally loaded corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Invent one cocktail
//! barkeep-cli generate
//!
//! # Invent five, reproducibly, as JSON lines
//! barkeep-cli generate --count 5 --seed 42 --json
//!
//! # Show association index statistics
//! barkeep-cli stats
//!
//! # Show what pairs with gin, and how often
//! barkeep-cli associates Gin
//! ```

mod commands;
mod helpers;

use barkeep_server::{
    corpus::{default_corpus_path, Corpus},
    errors::{AppError, AppResult},
    logging::LoggingConfig,
};
use barkeep_mixology::AssociationIndex;
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "barkeep-cli",
    about = "Barkeep cocktail CLI",
    long_about = "Invent never-before-seen cocktails and inspect the ingredient co-occurrence graph."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe corpus location (defaults to BARKEEP_RECIPES_PATH, then recipes.json next to the binary)
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Invent one or more cocktails
    Generate {
        /// Number of cocktails to invent
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,

        /// Print each cocktail as a JSON line instead of a text card
        #[arg(long)]
        json: bool,

        /// Seed the random generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show association index statistics
    Stats {
        /// Number of most connected ingredients to list
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// List the associates of one ingredient with their weights
    Associates {
        /// Ingredient identity, e.g. "Gin"
        identity: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::config_invalid(format!("Failed to initialize logging: {e}")))?;

    let path = resolve_recipes_path(cli.recipes)?;
    let corpus = Corpus::load(&path)?;
    let index = AssociationIndex::build(corpus.recipes());

    match cli.command {
        Command::Generate { count, json, seed } => {
            commands::generate::run(&corpus, &index, count, json, seed)?;
        }
        Command::Stats { top } => commands::stats::run(&index, top),
        Command::Associates { identity } => commands::associates::run(&index, &identity)?,
    }

    Ok(())
}

/// Corpus path from the flag, then the server's env var, then the conventional location
fn resolve_recipes_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Ok(path) = env::var("BARKEEP_RECIPES_PATH") {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_corpus_path().map_err(|e| {
        AppError::config_missing(format!(
            "No recipe corpus given and the executable directory is unknown: {e}"
        ))
    })
}
