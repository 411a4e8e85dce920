//! Seed parser with validation
//!
//! Parses YAML and validates schema version, names, and recipe uniqueness

#![allow(clippy::result_large_err)]

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::{SeedV0, SEED_SCHEMA_VERSION};
use recipebox_core::errors::RecipeBoxError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(format!("Failed to read seed file {}: {}", path.display(), e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != SEED_SCHEMA_VERSION {
        return Err(RecipeBoxError::UnsupportedSeedVersion {
            found: seed.schema_version,
            expected: SEED_SCHEMA_VERSION,
        }
        .into());
    }

    if seed.catalog.name.trim().is_empty() {
        return Err(seed_validation("Catalog name must not be blank"));
    }

    // Recipe names are unique within one file; the store itself allows duplicates
    let mut names = HashSet::new();
    for (index, recipe) in seed.recipes.iter().enumerate() {
        if recipe.name.trim().is_empty() {
            return Err(seed_validation(format!("Recipe #{} has a blank name", index + 1)));
        }

        if !names.insert(recipe.name.as_str()) {
            return Err(seed_validation(format!("Duplicate recipe name: {}", recipe.name)));
        }

        if recipe.ingredients.iter().any(|i| i.trim().is_empty()) {
            return Err(seed_validation(format!(
                "Recipe {} has a blank ingredient name",
                recipe.name
            )));
        }
    }

    Ok(())
}
