//! Seed importer orchestration
//!
//! Imports a validated catalog through the same reuse-or-create ingredient
//! logic as interactive writes, inside one transaction

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::writes::{link_ingredients_with, load_catalog};
use crate::repo::SqliteRepo;
use crate::seed::format_v0::SeedV0;
use crate::seed::{compute_seed_digest, parse_seed_file, parse_seed_str, provenance};
use recipebox_core::model::Recipe;
use rusqlite::Connection;
use std::path::Path;

/// Built-in sample catalog (30 Czech dishes)
pub const SAMPLE_CATALOG: &str = include_str!("../../seeds/sample_catalog.yaml");

/// Result of a seed import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedImportOutcome {
    /// Catalog written; `recipes` rows inserted
    Applied { digest: String, recipes: usize },
    /// A catalog with the same digest was imported before; nothing written
    AlreadyApplied { digest: String },
}

impl SeedImportOutcome {
    pub fn digest(&self) -> &str {
        match self {
            SeedImportOutcome::Applied { digest, .. } => digest,
            SeedImportOutcome::AlreadyApplied { digest } => digest,
        }
    }
}

/// Import a seed file into the database
///
/// 1. Parses and validates the seed YAML
/// 2. Computes the seed digest and skips catalogs already applied
/// 3. Inserts every recipe and links its ingredients
/// 4. Records the digest in `seed_imports`, all in one transaction
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<SeedImportOutcome> {
    let seed = parse_seed_file(path)?;
    apply_seed(&seed, conn)
}

/// Import a seed held in memory
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<SeedImportOutcome> {
    let seed = parse_seed_str(content)?;
    apply_seed(&seed, conn)
}

/// Import the built-in sample catalog
pub fn import_sample_catalog(conn: &mut Connection) -> Result<SeedImportOutcome> {
    import_seed_str(SAMPLE_CATALOG, conn)
}

fn apply_seed(seed: &SeedV0, conn: &mut Connection) -> Result<SeedImportOutcome> {
    let digest = compute_seed_digest(seed)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    if provenance::is_applied(&tx, &digest)? {
        tracing::info!(catalog = %seed.catalog.name, %digest, "seed already applied");
        return Ok(SeedImportOutcome::AlreadyApplied { digest });
    }

    let mut catalog = load_catalog(&tx)?;
    for seed_recipe in &seed.recipes {
        let recipe = Recipe::new(seed_recipe.name.clone(), seed_recipe.description.clone());
        let recipe_id = SqliteRepo::insert_recipe(&tx, &recipe)?;
        link_ingredients_with(&tx, &mut catalog, recipe_id, &seed_recipe.ingredients)?;
    }

    provenance::record_import(&tx, &digest, &seed.catalog.name, seed.recipes.len())?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        catalog = %seed.catalog.name,
        %digest,
        recipes = seed.recipes.len(),
        "seed applied"
    );

    Ok(SeedImportOutcome::Applied {
        digest,
        recipes: seed.recipes.len(),
    })
}
