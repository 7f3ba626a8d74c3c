// ABOUTME: Cocktail synthesis engine: ingredient association graph and random-walk generator
// ABOUTME: Extracted from the server crate so the algorithms stay free of I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barkeep Mixology
//!
//! Invents plausible, never-before-seen cocktails by recombining ingredients
//! from a corpus of known recipes.
//!
//! - [`AssociationIndex`] records which ingredients appear together in the
//!   corpus, weighted by how often they do.
//! - [`Synthesizer`] walks that graph from a random starting ingredient and
//!   names the result after words of related corpus recipes.
//!
//! ## Example Usage
//!
//! ```rust
//! use barkeep_core::models::{Ingredient, Recipe};
//! use barkeep_mixology::{AssociationIndex, Synthesizer};
//!
//! let corpus = vec![Recipe::new(
//!     "Gin Rickey",
//!     vec![
//!         Ingredient::measured("Gin", 4.5, "cl"),
//!         Ingredient::measured("Lime Juice", 1.5, "cl"),
//!         Ingredient::measured("Soda Water", 12.0, "cl"),
//!     ],
//! )];
//! let index = AssociationIndex::build(&corpus);
//! let cocktail = Synthesizer::new(&index, &corpus)
//!     .synthesize(&mut rand::thread_rng())
//!     .unwrap();
//! assert!(cocktail.ingredients.len() >= 2);
//! ```

/// Per-call synthesis errors
pub mod error;
/// Ingredient co-occurrence index
pub mod index;
/// Random-walk expansion and naming
pub mod synthesizer;

pub use error::{SynthesisError, SynthesisResult};
pub use index::{AssociationIndex, IndexStats};
pub use synthesizer::{CocktailCard, SynthesizedRecipe, Synthesizer};
