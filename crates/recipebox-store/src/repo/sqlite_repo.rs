//! SQLite repository implementation
//!
//! Primitive reads and writes over `recipes`, `ingredients` and
//! `recipe_ingredient_cross_ref`. Every function takes a `&Connection`, so
//! they compose inside a `rusqlite::Transaction` (which derefs to one).

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use recipebox_core::model::{Ingredient, Recipe, RecipeIngredientLink, RecipeWithIngredients};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};
use std::collections::HashMap;

/// Bound parameters per `IN (...)` query when hydrating ingredient lists
const HYDRATE_CHUNK: usize = 500;

/// SQLite repository for recipes, ingredients and their links
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a recipe, or replace the row that already has its id
    ///
    /// `recipe_id == 0` lets the database assign a fresh id. Returns the id
    /// of the written row.
    pub fn insert_recipe(conn: &Connection, recipe: &Recipe) -> Result<i64> {
        conn.query_row(
            "INSERT INTO recipes (recipeId, name, description)
             VALUES (NULLIF(?1, 0), ?2, ?3)
             ON CONFLICT(recipeId) DO UPDATE SET
                name = excluded.name,
                description = excluded.description
             RETURNING recipeId",
            rusqlite::params![recipe.recipe_id, recipe.name, recipe.description],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// Insert an ingredient, or replace the row that already has its id
    ///
    /// Does not look at names; deduplication belongs to the caller.
    pub fn insert_ingredient(conn: &Connection, ingredient: &Ingredient) -> Result<i64> {
        conn.query_row(
            "INSERT INTO ingredients (ingredientId, name)
             VALUES (NULLIF(?1, 0), ?2)
             ON CONFLICT(ingredientId) DO UPDATE SET name = excluded.name
             RETURNING ingredientId",
            rusqlite::params![ingredient.ingredient_id, ingredient.name],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// Link a recipe to an ingredient; linking an existing pair is a no-op
    pub fn insert_link(conn: &Connection, recipe_id: i64, ingredient_id: i64) -> Result<()> {
        conn.execute(
            "INSERT INTO recipe_ingredient_cross_ref (recipeId, ingredientId)
             VALUES (?1, ?2)
             ON CONFLICT(recipeId, ingredientId) DO NOTHING",
            rusqlite::params![recipe_id, ingredient_id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Overwrite name and description of an existing recipe
    ///
    /// Returns the number of rows changed; 0 means no recipe had that id.
    pub fn update_recipe(conn: &Connection, recipe: &Recipe) -> Result<usize> {
        conn.execute(
            "UPDATE recipes SET name = ?2, description = ?3 WHERE recipeId = ?1",
            rusqlite::params![recipe.recipe_id, recipe.name, recipe.description],
        )
        .map_err(from_rusqlite)
    }

    /// Delete a recipe row; returns rows removed (0 if absent)
    pub fn delete_recipe_by_id(conn: &Connection, recipe_id: i64) -> Result<usize> {
        conn.execute("DELETE FROM recipes WHERE recipeId = ?1", [recipe_id])
            .map_err(from_rusqlite)
    }

    /// Delete every link of a recipe; returns rows removed
    pub fn delete_links_for_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        conn.execute(
            "DELETE FROM recipe_ingredient_cross_ref WHERE recipeId = ?1",
            [recipe_id],
        )
        .map_err(from_rusqlite)
    }

    /// Get a recipe joined to its ingredients
    pub fn get_recipe_with_ingredients(
        conn: &Connection,
        recipe_id: i64,
    ) -> Result<Option<RecipeWithIngredients>> {
        let recipe = conn
            .query_row(
                "SELECT recipeId, name, description FROM recipes WHERE recipeId = ?1",
                [recipe_id],
                recipe_from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        match recipe {
            Some(recipe) => {
                let mut joined = Self::hydrate(conn, vec![recipe])?;
                Ok(joined.pop())
            }
            None => Ok(None),
        }
    }

    /// Every recipe joined to its ingredients
    ///
    /// Row order is whatever SQLite returns; callers must not depend on it.
    pub fn get_all_recipes_with_ingredients(conn: &Connection) -> Result<Vec<RecipeWithIngredients>> {
        let recipes = query_recipes(conn, "SELECT recipeId, name, description FROM recipes", [])?;
        Self::hydrate(conn, recipes)
    }

    /// Every ingredient row, oldest first (may include case variants)
    pub fn get_all_ingredients(conn: &Connection) -> Result<Vec<Ingredient>> {
        let mut stmt = conn
            .prepare("SELECT ingredientId, name FROM ingredients ORDER BY ingredientId")
            .map_err(from_rusqlite)?;
        let ingredients = stmt
            .query_map([], ingredient_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(ingredients)
    }

    /// Exact, case-sensitive name lookup; the oldest row wins on duplicates
    pub fn get_ingredient_by_name(conn: &Connection, name: &str) -> Result<Option<Ingredient>> {
        conn.query_row(
            "SELECT ingredientId, name FROM ingredients WHERE name = ?1 ORDER BY ingredientId LIMIT 1",
            [name],
            ingredient_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Recipes whose name matches a `LIKE` pattern, joined to ingredients
    ///
    /// The caller supplies the wildcards (`%cake%`). Both sides are lowercased
    /// with Unicode rules, so `řízek` finds `Smažený Řízek`.
    pub fn search_recipes_with_ingredients(
        conn: &Connection,
        pattern: &str,
    ) -> Result<Vec<RecipeWithIngredients>> {
        let recipes = query_recipes(
            conn,
            "SELECT recipeId, name, description FROM recipes WHERE rb_fold(name) LIKE rb_fold(?1)",
            [pattern],
        )?;
        Self::hydrate(conn, recipes)
    }

    /// Recipes linked to every ingredient named in `names`
    ///
    /// Groups the joined rows per recipe and keeps groups whose number of
    /// distinct matched names equals `count`. Recipes with further
    /// ingredients still qualify. Names match exactly (case-sensitive).
    pub fn filter_recipes_by_ingredients<S: AsRef<str>>(
        conn: &Connection,
        names: &[S],
        count: usize,
    ) -> Result<Vec<RecipeWithIngredients>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = numbered_placeholders(1, names.len());
        let sql = format!(
            "SELECT r.recipeId, r.name, r.description
             FROM recipes r
             JOIN recipe_ingredient_cross_ref x ON x.recipeId = r.recipeId
             JOIN ingredients i ON i.ingredientId = x.ingredientId
             WHERE i.name IN ({placeholders})
             GROUP BY r.recipeId
             HAVING COUNT(DISTINCT i.name) = ?{}",
            names.len() + 1
        );

        let mut params: Vec<Value> = names
            .iter()
            .map(|n| Value::Text(n.as_ref().to_string()))
            .collect();
        params.push(Value::Integer(count as i64));

        let recipes = query_recipes(conn, &sql, params_from_iter(params))?;
        Self::hydrate(conn, recipes)
    }

    /// Links of one recipe, in insertion order
    pub fn list_links_for_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<RecipeIngredientLink>> {
        let mut stmt = conn
            .prepare(
                "SELECT recipeId, ingredientId FROM recipe_ingredient_cross_ref
                 WHERE recipeId = ?1 ORDER BY rowid",
            )
            .map_err(from_rusqlite)?;
        let links = stmt
            .query_map([recipe_id], |row| {
                Ok(RecipeIngredientLink::new(row.get(0)?, row.get(1)?))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(links)
    }

    /// Attach ingredient lists to already-loaded recipes
    ///
    /// Loads links in chunks with one query per chunk instead of one per
    /// recipe. Ingredients keep link insertion order.
    fn hydrate(conn: &Connection, recipes: Vec<Recipe>) -> Result<Vec<RecipeWithIngredients>> {
        let mut by_recipe: HashMap<i64, Vec<Ingredient>> = HashMap::new();

        let ids: Vec<i64> = recipes.iter().map(|r| r.recipe_id).collect();
        for chunk in ids.chunks(HYDRATE_CHUNK) {
            let sql = format!(
                "SELECT x.recipeId, i.ingredientId, i.name
                 FROM recipe_ingredient_cross_ref x
                 JOIN ingredients i ON i.ingredientId = x.ingredientId
                 WHERE x.recipeId IN ({})
                 ORDER BY x.rowid",
                numbered_placeholders(1, chunk.len())
            );
            let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
            let rows = stmt
                .query_map(params_from_iter(chunk.iter()), |row| {
                    Ok((row.get::<_, i64>(0)?, Ingredient::with_id(row.get(1)?, row.get::<_, String>(2)?)))
                })
                .map_err(from_rusqlite)?;

            for row in rows {
                let (recipe_id, ingredient) = row.map_err(from_rusqlite)?;
                by_recipe.entry(recipe_id).or_default().push(ingredient);
            }
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let ingredients = by_recipe.remove(&recipe.recipe_id).unwrap_or_default();
                RecipeWithIngredients {
                    recipe,
                    ingredients,
                }
            })
            .collect())
    }
}

fn query_recipes<P: rusqlite::Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<Recipe>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let recipes = stmt
        .query_map(params, recipe_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(recipes)
}

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe::with_id(
        row.get::<_, i64>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
    ))
}

fn ingredient_from_row(row: &Row<'_>) -> rusqlite::Result<Ingredient> {
    Ok(Ingredient::with_id(row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
}

/// `?first, ?first+1, ...` for `len` parameters
fn numbered_placeholders(first: usize, len: usize) -> String {
    (first..first + len)
        .map(|n| format!("?{n}"))
        .collect::<Vec<_>>()
        .join(", ")
}
