// ABOUTME: Process-wide read-only state shared by every request
// ABOUTME: Holds the configuration, the recipe corpus, and the association index built from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::corpus::Corpus;
use barkeep_core::errors::AppResult;
use barkeep_mixology::{AssociationIndex, Synthesizer};
use tracing::info;

/// Server resources built once at startup and never mutated
///
/// Shared across handlers as `Arc<ServerResources>`. Nothing in here is
/// written after construction, so concurrent requests read it without locks.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Startup configuration
    pub config: ServerConfig,
    /// Reference recipes, used for naming
    pub corpus: Corpus,
    /// Co-occurrence graph, used for ingredient expansion
    pub index: AssociationIndex,
}

impl ServerResources {
    /// Build the index for an already loaded corpus
    #[must_use]
    pub fn new(config: ServerConfig, corpus: Corpus) -> Self {
        let index = AssociationIndex::build(corpus.recipes());
        let stats = index.stats();

        info!(
            recipes = stats.recipes,
            identities = stats.identities,
            edges = stats.edges,
            "Association index ready"
        );

        Self {
            config,
            corpus,
            index,
        }
    }

    /// Load the corpus named by `config` and build the index
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded; the server must not
    /// start in that case.
    pub fn load(config: ServerConfig) -> AppResult<Self> {
        let corpus = Corpus::load(&config.recipes_path)?;
        Ok(Self::new(config, corpus))
    }

    /// Synthesizer over the shared index and corpus
    #[must_use]
    pub fn synthesizer(&self) -> Synthesizer<'_> {
        Synthesizer::new(&self.index, self.corpus.recipes())
    }
}
