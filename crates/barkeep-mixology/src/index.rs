// ABOUTME: Ingredient co-occurrence graph built once from the recipe corpus
// ABOUTME: Maps each ingredient identity to every ingredient sharing a recipe with it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Association Index
//!
//! For every recipe and every ingredient `src` with a non-empty identity, all
//! *other* ingredients of that recipe are appended to `src`'s associate list.
//! Lists keep corpus order and are never deduplicated: an ingredient that
//! co-occurs with `src` in three recipes is listed three times, which makes it
//! three times as likely to be drawn by the synthesizer.
//!
//! The index is immutable after [`AssociationIndex::build`] and can be shared
//! across threads without synchronization.

use barkeep_core::models::{Ingredient, Recipe};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Precomputed co-occurrence mapping from ingredient identity to associates
#[derive(Debug, Clone, Default)]
pub struct AssociationIndex {
    associations: HashMap<String, Vec<Ingredient>>,
    /// Distinct identities in first-appearance order
    identities: Vec<String>,
    recipe_count: usize,
}

/// Size summary of an [`AssociationIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Corpus recipes the index was built from
    pub recipes: usize,
    /// Distinct non-empty identities (graph nodes)
    pub identities: usize,
    /// Total associate entries across all lists (weighted edges)
    pub edges: usize,
}

impl AssociationIndex {
    /// Build the index from the full corpus
    #[must_use]
    pub fn build(recipes: &[Recipe]) -> Self {
        let mut associations: HashMap<String, Vec<Ingredient>> = HashMap::new();
        let mut identities = Vec::new();

        for recipe in recipes {
            for (position, source) in recipe.ingredients.iter().enumerate() {
                if source.is_special() {
                    continue;
                }

                let associates = match associations.entry(source.identity.clone()) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        identities.push(source.identity.clone());
                        entry.insert(Vec::new())
                    }
                };

                associates.extend(
                    recipe
                        .ingredients
                        .iter()
                        .enumerate()
                        .filter(|(other, _)| *other != position)
                        .map(|(_, target)| target.clone()),
                );
            }
        }

        tracing::debug!(
            recipes = recipes.len(),
            identities = identities.len(),
            "Association index built"
        );

        Self {
            associations,
            identities,
            recipe_count: recipes.len(),
        }
    }

    /// Distinct identities in the order they first appear in the corpus
    #[must_use]
    pub fn identities(&self) -> &[String] {
        &self.identities
    }

    /// Associates of `identity`, or an empty slice for an unknown identity
    #[must_use]
    pub fn associates(&self, identity: &str) -> &[Ingredient] {
        self.associations
            .get(identity)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `identity` is a node of the graph
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.associations.contains_key(identity)
    }

    /// Number of distinct identities
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// True when the corpus contributed no identities at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Total associate entries, counting repeats
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.associations.values().map(Vec::len).sum()
    }

    /// Size summary for logging and diagnostics
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            recipes: self.recipe_count,
            identities: self.len(),
            edges: self.edge_count(),
        }
    }

    /// Associates of `identity` grouped by printed name with their multiplicity
    ///
    /// Groups keep first-appearance order. The multiplicity is the weight the
    /// synthesizer effectively gives each associate.
    #[must_use]
    pub fn weighted_associates(&self, identity: &str) -> Vec<(&str, usize)> {
        let mut weights: Vec<(&str, usize)> = Vec::new();
        for associate in self.associates(identity) {
            let name = associate.printed_name();
            match weights.iter_mut().find(|(seen, _)| *seen == name) {
                Some((_, count)) => *count += 1,
                None => weights.push((name, 1)),
            }
        }
        weights
    }
}
