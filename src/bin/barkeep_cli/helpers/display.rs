// ABOUTME: Output formatting helpers for barkeep-cli
// ABOUTME: Prints cocktails, index statistics, and associate lists to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barkeep_mixology::{CocktailCard, IndexStats, SynthesizedRecipe};
use barkeep_server::errors::AppResult;

/// Print a cocktail as a text card followed by a blank line
pub fn display_cocktail_card(cocktail: &SynthesizedRecipe) {
    println!("{cocktail}");
}

/// Print a rendered cocktail as one JSON line
pub fn display_cocktail_json(card: &CocktailCard) -> AppResult<()> {
    println!("{}", serde_json::to_string(card)?);
    Ok(())
}

/// Print index size and the most connected ingredients
pub fn display_index_stats(stats: &IndexStats, connected: &[(&str, usize)]) {
    println!("Association Index");
    println!("{}", "=".repeat(40));
    println!("   Recipes:     {}", stats.recipes);
    println!("   Ingredients: {}", stats.identities);
    println!("   Edges:       {}", stats.edges);

    if stats.identities > 0 {
        println!(
            "   Avg associates per ingredient: {:.1}",
            stats.edges as f64 / stats.identities as f64
        );
    }

    if !connected.is_empty() {
        println!("\nMost connected:");
        for (identity, associates) in connected {
            println!("   {identity:<30} {associates}");
        }
    }
}

/// Print one identity's associates with their multiplicity
pub fn display_associates(identity: &str, associates: &[(&str, usize)]) {
    println!("{identity} pairs with:");
    if associates.is_empty() {
        println!("   (nothing: it only appears alone)");
        return;
    }
    for (name, weight) in associates {
        println!("   {name:<30} x{weight}");
    }
}
