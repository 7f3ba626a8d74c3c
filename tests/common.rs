// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, corpus fixtures, and ready-made server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `barkeep_server`

use barkeep_server::{
    config::{Environment, LogLevel, ServerConfig},
    corpus::Corpus,
    resources::ServerResources,
};
use std::path::PathBuf;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The sample corpus shipped in `data/recipes.json`
pub fn sample_corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("recipes.json")
}

/// Two small recipes sharing lime juice
pub const SMALL_CORPUS: &str = r#"[
    {
        "name": "Gin Rickey",
        "glass": "highball",
        "ingredients": [
            {"unit": "cl", "amount": 4.5, "ingredient": "Gin"},
            {"unit": "cl", "amount": 1.5, "ingredient": "Lime juice"},
            {"unit": "cl", "amount": 12, "ingredient": "Soda water"},
            {"special": "Ice"}
        ]
    },
    {
        "name": "Vodka Gimlet",
        "glass": "martini",
        "ingredients": [
            {"unit": "cl", "amount": 6, "ingredient": "Vodka"},
            {"unit": "cl", "amount": 1.5, "ingredient": "Lime juice"},
            {"unit": "ml", "amount": 10, "ingredient": "Syrup", "label": "Simple syrup"}
        ]
    }
]"#;

/// Configuration pointing at `recipes_path`, never touching the environment
pub fn test_config(recipes_path: PathBuf) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".into(),
        recipes_path,
        environment: Environment::Testing,
        log_level: LogLevel::Warn,
    }
}

/// Resources over an in-memory corpus
pub fn resources_from_json(json: &str) -> Arc<ServerResources> {
    init_test_logging();
    let corpus = Corpus::from_json_str(json).unwrap();
    Arc::new(ServerResources::new(
        test_config(PathBuf::from("in-memory")),
        corpus,
    ))
}

/// Resources over the shipped sample corpus
pub fn sample_resources() -> Arc<ServerResources> {
    init_test_logging();
    let path = sample_corpus_path();
    let corpus = Corpus::load(&path).unwrap();
    Arc::new(ServerResources::new(test_config(path), corpus))
}
