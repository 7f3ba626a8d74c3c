// ABOUTME: Per-call synthesis failures for degenerate corpora or walks
// ABOUTME: Converted into AppError at the invocation boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barkeep_core::constants::synthesis::MIN_NAME_FRAGMENTS;
use barkeep_core::errors::AppError;
use thiserror::Error;

/// Errors that abort a single synthesis call
///
/// Neither is fatal to the process: the index stays valid and the next call
/// may well succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The association index has no identity to seed the walk from
    #[error("the recipe corpus has no ingredients to start a cocktail from")]
    EmptyIndex,

    /// The walk accepted too few ingredients to derive a name
    #[error(
        "the ingredient walk produced {ingredients} ingredient(s), at least {min} are needed to name a cocktail",
        min = MIN_NAME_FRAGMENTS
    )]
    DegenerateRecipe {
        /// Ingredients accepted before naming
        ingredients: usize,
    },
}

/// Result type for synthesis operations
pub type SynthesisResult<T> = Result<T, SynthesisError>;

impl From<SynthesisError> for AppError {
    fn from(error: SynthesisError) -> Self {
        Self::synthesis(error.to_string()).with_source(error)
    }
}
