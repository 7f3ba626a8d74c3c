// ABOUTME: Recipe corpus data model shared by the synthesis engine and the server
// ABOUTME: Re-exports Recipe and Ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient lines and their rendering
pub mod ingredient;
/// Corpus recipe records
pub mod recipe;

pub use ingredient::{format_amount, Ingredient};
pub use recipe::Recipe;
