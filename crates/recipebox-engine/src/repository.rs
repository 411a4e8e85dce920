//! Async recipe repository
//!
//! `RecipeRepository` is the single entry point callers use for recipes and
//! ingredients. It owns its connection; clones share it, and the connection
//! closes when the last clone is dropped.

#![allow(clippy::result_large_err)]

use crate::worker::run_logged;
use recipebox_core::errors::Result;
use recipebox_core::model::{Ingredient, Recipe, RecipeWithIngredients};
use recipebox_core::ops::{distinct_by_name, distinct_names, intersect_recipes};
use recipebox_store::repo::writes;
use recipebox_store::seed::{self, SeedImportOutcome};
use recipebox_store::{db, SqliteRepo};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Handle to a recipe store
#[derive(Clone)]
pub struct RecipeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RecipeRepository {
    /// Open (creating and migrating if needed) the store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_connection(db::open(path)?))
    }

    /// Fresh in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(db::open_in_memory()?))
    }

    /// Wrap an already configured and migrated connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Every recipe, without ingredients; order is storage-defined
    pub async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        run_logged(&self.conn, "get_all_recipes", |conn| {
            Ok(into_recipes(SqliteRepo::get_all_recipes_with_ingredients(conn)?))
        })
        .await
    }

    /// One recipe with its ingredients, or `None` if the id is unknown
    pub async fn get_recipe_with_ingredients(
        &self,
        recipe_id: i64,
    ) -> Result<Option<RecipeWithIngredients>> {
        run_logged(&self.conn, "get_recipe_with_ingredients", move |conn| {
            SqliteRepo::get_recipe_with_ingredients(conn, recipe_id)
        })
        .await
    }

    /// All ingredients with case variants collapsed (first stored row wins)
    pub async fn get_all_ingredients(&self) -> Result<Vec<Ingredient>> {
        run_logged(&self.conn, "get_all_ingredients", |conn| {
            Ok(distinct_by_name(SqliteRepo::get_all_ingredients(conn)?))
        })
        .await
    }

    /// Delete a recipe and its links; returns whether it existed
    ///
    /// Deleting an id that is not stored is a no-op.
    pub async fn delete_recipe(&self, recipe_id: i64) -> Result<bool> {
        run_logged(&self.conn, "delete_recipe", move |conn| {
            writes::delete_recipe_cascade(conn, recipe_id)
        })
        .await
    }

    /// Insert a recipe linked to `ingredient_names`; returns its id
    ///
    /// Each name reuses a stored ingredient matching it ignoring case, or
    /// creates one. A non-zero `recipe_id` replaces that row and its whole
    /// ingredient list.
    pub async fn insert_recipe<I, S>(&self, recipe: Recipe, ingredient_names: I) -> Result<i64>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = collect_names(ingredient_names);
        run_logged(&self.conn, "insert_recipe", move |conn| {
            writes::insert_recipe_with_ingredients(conn, &recipe, &names)
        })
        .await
    }

    /// Replace a recipe's fields and its whole ingredient list
    ///
    /// Returns `false` without writing anything when `recipe.recipe_id` is
    /// not stored.
    pub async fn update_recipe<I, S>(&self, recipe: Recipe, ingredient_names: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = collect_names(ingredient_names);
        run_logged(&self.conn, "update_recipe", move |conn| {
            writes::update_recipe_with_ingredients(conn, &recipe, &names)
        })
        .await
    }

    /// Recipes containing every named ingredient (others allowed)
    ///
    /// Names match exactly. An empty list returns every recipe. Repeated
    /// names count once, so `["Flour", "Flour"]` behaves like `["Flour"]`
    /// rather than requiring two matches.
    pub async fn filter_recipes_by_ingredients<I, S>(&self, ingredient_names: I) -> Result<Vec<Recipe>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = collect_names(ingredient_names);
        run_logged(&self.conn, "filter_recipes_by_ingredients", move |conn| {
            filter_on(conn, &names)
        })
        .await
    }

    /// Recipes whose name contains `query`, ignoring case in any script
    pub async fn search_recipes(&self, query: &str) -> Result<Vec<Recipe>> {
        let pattern = like_pattern(query);
        run_logged(&self.conn, "search_recipes", move |conn| search_on(conn, &pattern)).await
    }

    /// Combined ingredient filter and name search
    ///
    /// An empty or missing query counts as no search. With neither criterion
    /// every recipe is returned; with both, the recipes found by each, in
    /// the filter result's order.
    pub async fn filter_and_search_recipes<I, S>(
        &self,
        ingredient_names: I,
        query: Option<&str>,
    ) -> Result<Vec<Recipe>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = collect_names(ingredient_names);
        let pattern = query.filter(|q| !q.is_empty()).map(like_pattern);

        run_logged(&self.conn, "filter_and_search_recipes", move |conn| {
            match (names.is_empty(), pattern) {
                (true, None) => Ok(into_recipes(SqliteRepo::get_all_recipes_with_ingredients(conn)?)),
                (true, Some(pattern)) => search_on(conn, &pattern),
                (false, None) => filter_on(conn, &names),
                (false, Some(pattern)) => {
                    let filtered = filter_on(conn, &names)?;
                    let searched = search_on(conn, &pattern)?;
                    Ok(intersect_recipes(filtered, &searched))
                }
            }
        })
        .await
    }

    /// Load the built-in sample catalog; a second call writes nothing
    pub async fn insert_sample_data(&self) -> Result<SeedImportOutcome> {
        run_logged(&self.conn, "insert_sample_data", seed::import_sample_catalog).await
    }

    /// Import a YAML recipe catalog; re-importing the same catalog writes nothing
    pub async fn import_seed_file(&self, path: impl Into<PathBuf>) -> Result<SeedImportOutcome> {
        let path = path.into();
        run_logged(&self.conn, "import_seed_file", move |conn| seed::import_seed(&path, conn)).await
    }
}

fn collect_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// `%query%`; `%` and `_` inside `query` keep their `LIKE` meaning
fn like_pattern(query: &str) -> String {
    format!("%{query}%")
}

fn into_recipes(joined: Vec<RecipeWithIngredients>) -> Vec<Recipe> {
    joined.into_iter().map(RecipeWithIngredients::into_recipe).collect()
}

fn filter_on(conn: &Connection, names: &[String]) -> Result<Vec<Recipe>> {
    if names.is_empty() {
        return Ok(into_recipes(SqliteRepo::get_all_recipes_with_ingredients(conn)?));
    }

    // A repeated name would otherwise raise the required count past what
    // any recipe can reach
    let distinct = distinct_names(names);
    let found = SqliteRepo::filter_recipes_by_ingredients(conn, &distinct, distinct.len())?;
    Ok(into_recipes(found))
}

fn search_on(conn: &Connection, pattern: &str) -> Result<Vec<Recipe>> {
    Ok(into_recipes(SqliteRepo::search_recipes_with_ingredients(conn, pattern)?))
}
