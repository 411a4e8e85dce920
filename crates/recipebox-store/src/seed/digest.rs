//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds so re-importing the same catalog
//! can be detected

#![allow(clippy::result_large_err)]

use crate::errors::{serialization_error, Result};
use crate::seed::format_v0::SeedV0;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed<'a> {
    schema_version: u32,
    catalog_name: &'a str,
    recipes: Vec<CanonicalRecipe<'a>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalRecipe<'a> {
    name: &'a str,
    description: &'a str,
    ingredients: Vec<&'a str>,
}

/// Compute a stable digest for a seed
///
/// Recipes are sorted by name so file order does not matter. Ingredient
/// order within a recipe is kept, since it is the stored link order.
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let canonical = canonicalize_seed(seed);

    let json = serde_json::to_string(&canonical)
        .map_err(|e| serialization_error("seed_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

fn canonicalize_seed(seed: &SeedV0) -> CanonicalSeed<'_> {
    let mut recipes: Vec<CanonicalRecipe<'_>> = seed
        .recipes
        .iter()
        .map(|r| CanonicalRecipe {
            name: &r.name,
            description: &r.description,
            ingredients: r.ingredients.iter().map(String::as_str).collect(),
        })
        .collect();
    recipes.sort();

    CanonicalSeed {
        schema_version: seed.schema_version,
        catalog_name: &seed.catalog.name,
        recipes,
    }
}
