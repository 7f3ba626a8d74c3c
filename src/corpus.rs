// ABOUTME: Recipe corpus loading from the strict JSON schema
// ABOUTME: Resolves the conventional corpus location and maps load failures to startup errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Corpus
//!
//! The corpus is an ordered JSON array of recipes. It is read exactly once,
//! before any request is served, and kept resident for the process lifetime.
//! Any failure here (missing file, malformed JSON, an unknown field, a type
//! mismatch) is fatal: the server never starts without a valid corpus.

use barkeep_core::constants::corpus::RECIPES_FILE_NAME;
use barkeep_core::errors::{AppError, AppResult};
use barkeep_core::models::Recipe;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Immutable, ordered collection of reference recipes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    recipes: Vec<Recipe>,
}

impl Corpus {
    /// Wrap already-decoded recipes
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Decode a corpus from any JSON byte source
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error when the input is not a JSON array of
    /// recipes matching the strict schema.
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_reader(reader).map_err(|e| {
            AppError::config_invalid(format!("Recipe corpus does not match the schema: {e}"))
                .with_source(e)
        })?;
        Ok(Self { recipes })
    }

    /// Decode a corpus from a JSON string
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error on malformed or non-conforming JSON.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Load the corpus file at `path`
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if the file does not exist and
    /// `CONFIG_INVALID` if it cannot be read or decoded.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            let message = format!("Cannot open recipe corpus {}: {e}", path.display());
            if e.kind() == io::ErrorKind::NotFound {
                AppError::config_missing(message).with_source(e)
            } else {
                AppError::config_invalid(message).with_source(e)
            }
        })?;

        let corpus = Self::from_reader(BufReader::new(file)).map_err(|mut e| {
            e.message = format!("{}: {}", path.display(), e.message);
            e
        })?;

        info!(
            path = %path.display(),
            recipes = corpus.len(),
            "Recipe corpus loaded"
        );

        Ok(corpus)
    }

    /// Recipes in corpus order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True for a corpus with no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// `recipes.json` in the directory of the running executable
///
/// # Errors
///
/// Returns an I/O error if the executable path cannot be determined.
pub fn default_corpus_path() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(RECIPES_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkeep_core::errors::ErrorCode;

    #[test]
    fn test_decodes_ordered_recipes() {
        let corpus = Corpus::from_json_str(
            r#"[
                {"name": "First", "ingredients": [{"ingredient": "Gin", "amount": 4, "unit": "cl"}]},
                {"name": "Second", "glass": "coupe"}
            ]"#,
        )
        .unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.recipes()[0].name, "First");
        assert_eq!(corpus.recipes()[1].glass, "coupe");
        assert!(corpus.recipes()[1].ingredients.is_empty());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let corpus = Corpus::from_json_str("[]").unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_unknown_recipe_field_is_rejected() {
        let error = Corpus::from_json_str(r#"[{"name": "X", "rating": 5}]"#).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("rating"));
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let error =
            Corpus::from_json_str(r#"[{"name": "X", "ingredients": [{"amount": "two"}]}]"#)
                .unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_default_path_uses_conventional_file_name() {
        let path = default_corpus_path().unwrap();
        assert_eq!(path.file_name().unwrap(), RECIPES_FILE_NAME);
    }
}
