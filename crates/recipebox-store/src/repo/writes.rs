//! Multi-step recipe writes
//!
//! Each public function here runs in a single transaction: either every
//! row change lands or none does. Ingredient names are resolved through an
//! [`IngredientCatalog`], so a name matching an existing ingredient ignoring
//! case reuses that row instead of creating a new one.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use recipebox_core::model::{Ingredient, Recipe};
use recipebox_core::ops::IngredientCatalog;
use rusqlite::Connection;

/// Build a catalog of the ingredients already stored (oldest row wins)
pub fn load_catalog(conn: &Connection) -> Result<IngredientCatalog> {
    let existing = SqliteRepo::get_all_ingredients(conn)?;
    Ok(IngredientCatalog::from_ingredients(&existing))
}

/// Link `recipe_id` to each name in input order, creating missing ingredients
///
/// A name repeated in `names` (in any case) resolves to the same row, and
/// the second link write is a no-op.
pub fn link_ingredients_with<S: AsRef<str>>(
    conn: &Connection,
    catalog: &mut IngredientCatalog,
    recipe_id: i64,
    names: &[S],
) -> Result<()> {
    for name in names {
        let ingredient_id = catalog.resolve_or_create(name.as_ref(), |n| {
            SqliteRepo::insert_ingredient(conn, &Ingredient::new(n))
        })?;
        SqliteRepo::insert_link(conn, recipe_id, ingredient_id)?;
    }
    Ok(())
}

/// Insert a recipe and link it to `names`; returns the recipe id
///
/// A recipe carrying the id of a stored row overwrites that row, and its
/// ingredient list becomes exactly `names`.
pub fn insert_recipe_with_ingredients<S: AsRef<str>>(
    conn: &mut Connection,
    recipe: &Recipe,
    names: &[S],
) -> Result<i64> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let recipe_id = SqliteRepo::insert_recipe(&tx, recipe)?;
    if recipe.recipe_id != 0 {
        SqliteRepo::delete_links_for_recipe(&tx, recipe_id)?;
    }
    let mut catalog = load_catalog(&tx)?;
    link_ingredients_with(&tx, &mut catalog, recipe_id, names)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(recipe_id, ingredient_count = names.len(), "inserted recipe");
    Ok(recipe_id)
}

/// Replace a recipe row and its whole ingredient list
///
/// Returns `false`, having written nothing, when no recipe has
/// `recipe.recipe_id`.
pub fn update_recipe_with_ingredients<S: AsRef<str>>(
    conn: &mut Connection,
    recipe: &Recipe,
    names: &[S],
) -> Result<bool> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    if SqliteRepo::update_recipe(&tx, recipe)? == 0 {
        return Ok(false);
    }

    SqliteRepo::delete_links_for_recipe(&tx, recipe.recipe_id)?;
    let mut catalog = load_catalog(&tx)?;
    link_ingredients_with(&tx, &mut catalog, recipe.recipe_id, names)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(recipe_id = recipe.recipe_id, "updated recipe");
    Ok(true)
}

/// Delete a recipe's links, then the recipe; `false` if it did not exist
///
/// Ingredient rows are left in place even when nothing links to them.
pub fn delete_recipe_cascade(conn: &mut Connection, recipe_id: i64) -> Result<bool> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    SqliteRepo::delete_links_for_recipe(&tx, recipe_id)?;
    let removed = SqliteRepo::delete_recipe_by_id(&tx, recipe_id)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[test]
    fn test_repeated_names_link_once() {
        let mut conn = open_in_memory().unwrap();

        let id = insert_recipe_with_ingredients(
            &mut conn,
            &Recipe::new("Palačinky", ""),
            &["Mouka", "mouka", "Mléko", "MOUKA"],
        )
        .unwrap();

        let links = SqliteRepo::list_links_for_recipe(&conn, id).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(SqliteRepo::get_all_ingredients(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_update_missing_recipe_writes_nothing() {
        let mut conn = open_in_memory().unwrap();

        let updated =
            update_recipe_with_ingredients(&mut conn, &Recipe::with_id(42, "Ghost", ""), &["Salt"])
                .unwrap();

        assert!(!updated);
        assert!(SqliteRepo::get_all_ingredients(&conn).unwrap().is_empty());
    }
}
