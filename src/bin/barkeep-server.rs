// ABOUTME: Cocktail server binary serving invented recipes over HTTP
// ABOUTME: Loads configuration and the recipe corpus, then runs until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Barkeep Server Binary
//!
//! Starts the HTTP cocktail service. The corpus is loaded before the listener
//! binds; if it is missing or invalid the process exits without serving.

use anyhow::Result;
use barkeep_server::{
    config::ServerConfig, logging, resources::ServerResources, server::Server,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "barkeep-server")]
#[command(about = "Barkeep - serves never-before-seen cocktails over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the recipe corpus location
    #[arg(long)]
    recipes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(recipes) = args.recipes {
        config.recipes_path = recipes;
    }

    info!("Starting Barkeep cocktail server");
    info!("{}", config.summary());

    let resources = match ServerResources::load(config) {
        Ok(resources) => Arc::new(resources),
        Err(e) => {
            error!("Refusing to start without a valid recipe corpus: {e}");
            return Err(e.into());
        }
    };

    display_available_endpoints(&resources.config.bind_address());

    Server::new(resources).run().await
}

fn display_available_endpoints(addr: &str) {
    info!("=== Available Endpoints ===");
    info!("  Cocktail:    GET http://{addr}/cocktail");
    info!("  Index stats: GET http://{addr}/stats");
    info!("  Associates:  GET http://{addr}/associates/<ingredient>");
    info!("  Health:      GET http://{addr}/health");
    info!("  Readiness:   GET http://{addr}/ready");
    info!("===========================");
}
