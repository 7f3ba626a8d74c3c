// ABOUTME: Corpus recipe record as loaded from the recipe file
// ABOUTME: Strict schema (unknown fields rejected) plus the plain-text recipe card rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Ingredient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A known cocktail from the reference corpus
///
/// Corpus recipes are immutable reference data: loaded once, never mutated.
/// Absent fields default to empty values; unknown fields fail deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Recipe {
    /// Cocktail name, e.g. "Dry Martini"
    pub name: String,
    /// Serving glass
    pub glass: String,
    /// Corpus category ("All Day Cocktail", "Before Dinner Cocktail", ...)
    pub category: String,
    /// Garnish description
    pub garnish: String,
    /// Free-text preparation instructions
    pub preparation: String,
    /// Ingredients in recipe order
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Create a recipe with just a name and ingredients
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            ..Self::default()
        }
    }

    /// Whether any ingredient of this recipe prints exactly as `printed_name`
    #[must_use]
    pub fn contains_printed_name(&self, printed_name: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.printed_name() == printed_name)
    }

    /// Space-delimited words of the recipe name
    pub fn name_words(&self) -> impl Iterator<Item = &str> {
        self.name.split(' ')
    }
}

/// Plain-text recipe card: the name line followed by one bullet per ingredient
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {ingredient}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negroni() -> Recipe {
        Recipe::new(
            "Negroni",
            vec![
                Ingredient::measured("Gin", 3.0, "cl"),
                Ingredient::measured("Campari", 3.0, "cl"),
                Ingredient::measured("Vermouth", 3.0, "cl").with_label("Sweet red vermouth"),
            ],
        )
    }

    #[test]
    fn test_recipe_card_rendering() {
        let card = negroni().to_string();
        assert_eq!(
            card,
            "Negroni:\n  - 30 ml Gin\n  - 30 ml Campari\n  - 30 ml Sweet red vermouth\n"
        );
    }

    #[test]
    fn test_contains_printed_name_uses_label() {
        let recipe = negroni();
        assert!(recipe.contains_printed_name("Sweet red vermouth"));
        assert!(!recipe.contains_printed_name("Vermouth"));
    }

    #[test]
    fn test_name_words_split_on_single_spaces() {
        let recipe = Recipe::new("Corpse Reviver #2", vec![]);
        let words: Vec<&str> = recipe.name_words().collect();
        assert_eq!(words, vec!["Corpse", "Reviver", "#2"]);
    }

    #[test]
    fn test_strict_schema() {
        let ok = serde_json::from_str::<Recipe>(
            r#"{"name": "Kir", "glass": "white-wine", "ingredients": [{"unit": "cl", "amount": 9, "ingredient": "White Wine"}]}"#,
        );
        assert!(ok.is_ok());

        let unknown = serde_json::from_str::<Recipe>(r#"{"name": "Kir", "rating": 5}"#);
        assert!(unknown.is_err());

        let mistyped = serde_json::from_str::<Recipe>(
            r#"{"name": "Kir", "ingredients": [{"amount": "nine"}]}"#,
        );
        assert!(mistyped.is_err());
    }
}
