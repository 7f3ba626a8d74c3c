// ABOUTME: Random-walk cocktail synthesis over the association index
// ABOUTME: Expands an ingredient list from a random seed, then borrows a name from the corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Synthesizer
//!
//! One call is a single linear pass: seed, expand, name. Nothing is cached
//! between calls and the index and corpus are only read, so a [`Synthesizer`]
//! can serve any number of concurrent callers.
//!
//! ## Expansion
//!
//! The frontier starts with one identity drawn uniformly from the index. A
//! target of 2 to 5 ingredients is drawn, and exactly that many rounds run.
//! Each round pools the associate lists of every frontier identity (repeats
//! kept, so frequent pairings weigh more), visits the pool in a random
//! permutation and accepts the first candidate that has an identity and whose
//! printed name is not already in the cocktail. The accepted identity joins
//! the frontier. A round with no acceptable candidate adds nothing.
//!
//! ## Naming
//!
//! Between 2 and `n` fragments are drawn for a cocktail of `n` ingredients.
//! Each fragment picks a random ingredient of the cocktail, finds the first
//! corpus recipe (in random order) containing that printed name, and takes a
//! random word of the recipe's name. Slots with no matching recipe add nothing.

use crate::error::{SynthesisError, SynthesisResult};
use crate::index::AssociationIndex;
use barkeep_core::constants::synthesis::{
    MAX_EXTRA_INGREDIENTS, MIN_INGREDIENTS, MIN_NAME_FRAGMENTS,
};
use barkeep_core::models::{Ingredient, Recipe};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A freshly invented cocktail: a name and an ingredient list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SynthesizedRecipe {
    /// Name stitched together from corpus recipe names (may be empty)
    pub name: String,
    /// Accepted ingredients in the order the walk found them
    pub ingredients: Vec<Ingredient>,
}

impl SynthesizedRecipe {
    /// Pre-render the ingredients into display strings
    #[must_use]
    pub fn rendered(&self) -> CocktailCard {
        CocktailCard {
            name: self.name.clone(),
            ingredients: self.ingredients.iter().map(ToString::to_string).collect(),
        }
    }

    /// Recipe-shaped form with empty glass, category, garnish, and preparation
    #[must_use]
    pub fn to_recipe(&self) -> Recipe {
        Recipe::new(self.name.clone(), self.ingredients.clone())
    }
}

impl fmt::Display for SynthesizedRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_recipe(), f)
    }
}

/// Wire shape of a synthesized cocktail: name plus rendered ingredient lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocktailCard {
    /// Cocktail name
    pub name: String,
    /// Rendered ingredient lines, e.g. `"20 ml Lime Juice"`
    pub ingredients: Vec<String>,
}

/// Invents cocktails from a prebuilt index and its source corpus
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    index: &'a AssociationIndex,
    corpus: &'a [Recipe],
}

impl<'a> Synthesizer<'a> {
    /// Create a synthesizer over `index`, naming cocktails from `corpus`
    #[must_use]
    pub const fn new(index: &'a AssociationIndex, corpus: &'a [Recipe]) -> Self {
        Self { index, corpus }
    }

    /// Invent one cocktail
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::EmptyIndex`] when there is nothing to seed the
    /// walk from, and [`SynthesisError::DegenerateRecipe`] when the walk
    /// accepted fewer than two ingredients, which leaves no valid range of
    /// name fragments.
    pub fn synthesize<R>(&self, rng: &mut R) -> SynthesisResult<SynthesizedRecipe>
    where
        R: Rng + ?Sized,
    {
        let ingredients = self.expand(rng)?;
        let name = self.name(&ingredients, rng)?;

        debug!(
            name = %name,
            ingredients = ingredients.len(),
            "Cocktail synthesized"
        );

        Ok(SynthesizedRecipe { name, ingredients })
    }

    /// Run the random walk and return the accepted ingredients
    ///
    /// The result holds at most five ingredients, never two with the same
    /// printed name, and never a special item.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::EmptyIndex`] if the index has no identities.
    pub fn expand<R: Rng + ?Sized>(&self, rng: &mut R) -> SynthesisResult<Vec<Ingredient>> {
        let seed = self
            .index
            .identities()
            .choose(rng)
            .ok_or(SynthesisError::EmptyIndex)?;
        let target = MIN_INGREDIENTS + rng.gen_range(0..=MAX_EXTRA_INGREDIENTS);

        debug!(seed = %seed, target, "Starting ingredient walk");

        let mut frontier: Vec<&'a str> = vec![seed.as_str()];
        let mut accepted: Vec<Ingredient> = Vec::with_capacity(target);

        for round in 0..target {
            let mut pool: Vec<&'a Ingredient> = frontier
                .iter()
                .flat_map(|identity| self.index.associates(identity))
                .collect();
            pool.shuffle(rng);

            let choice = pool.into_iter().find(|candidate| {
                !candidate.is_special() && !has_printed_name(&accepted, candidate.printed_name())
            });

            match choice {
                Some(ingredient) => {
                    frontier.push(ingredient.identity());
                    accepted.push(ingredient.clone());
                }
                None => debug!(round, "No eligible ingredient this round"),
            }
        }

        Ok(accepted)
    }

    /// Derive a name for `ingredients` from words of corpus recipe names
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::DegenerateRecipe`] for fewer than two
    /// ingredients.
    pub fn name<R: Rng + ?Sized>(
        &self,
        ingredients: &[Ingredient],
        rng: &mut R,
    ) -> SynthesisResult<String> {
        if ingredients.len() < MIN_NAME_FRAGMENTS {
            return Err(SynthesisError::DegenerateRecipe {
                ingredients: ingredients.len(),
            });
        }

        let slots = MIN_NAME_FRAGMENTS + rng.gen_range(0..ingredients.len() - 1);
        let mut fragments: Vec<&'a str> = Vec::with_capacity(slots);

        for _ in 0..slots {
            let Some(ingredient) = ingredients.choose(rng) else {
                break;
            };
            if let Some(fragment) = self.name_fragment(ingredient.printed_name(), rng) {
                fragments.push(fragment);
            }
        }

        Ok(fragments.join(" "))
    }

    /// One random word from the first recipe, in random order, that uses `printed_name`
    fn name_fragment<R>(&self, printed_name: &str, rng: &mut R) -> Option<&'a str>
    where
        R: Rng + ?Sized,
    {
        let mut order: Vec<&'a Recipe> = self.corpus.iter().collect();
        order.shuffle(rng);

        let recipe = order
            .into_iter()
            .find(|recipe| recipe.contains_printed_name(printed_name))?;
        let words: Vec<&'a str> = recipe.name_words().collect();
        words.choose(rng).copied()
    }
}

fn has_printed_name(ingredients: &[Ingredient], printed_name: &str) -> bool {
    ingredients
        .iter()
        .any(|ingredient| ingredient.printed_name() == printed_name)
}
