//! List combinators used by the repository's query operations

use std::collections::HashSet;

use crate::model::{Ingredient, Recipe};

/// Drop ingredients whose name repeats an earlier one, ignoring case
///
/// Order of the surviving rows is preserved.
pub fn distinct_by_name(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .filter(|i| seen.insert(i.name.to_lowercase()))
        .collect()
}

/// Exact-match dedup of requested names, preserving first-seen order
pub fn distinct_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    names
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|n| seen.insert(*n))
        .map(str::to_string)
        .collect()
}

/// Recipes present in both lists
///
/// Equality is on the whole row. Result follows `left`'s order with
/// duplicates removed.
pub fn intersect_recipes(left: Vec<Recipe>, right: &[Recipe]) -> Vec<Recipe> {
    let right: HashSet<&Recipe> = right.iter().collect();
    let mut emitted = HashSet::new();
    left.into_iter()
        .filter(|r| right.contains(r) && emitted.insert(r.recipe_id))
        .collect()
}
