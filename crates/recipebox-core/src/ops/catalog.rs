//! Case-insensitive ingredient catalog
//!
//! Resolves ingredient names to ids so that "Flour" and "flour" share one
//! row. Built from the ingredient table at the start of a write and kept in
//! step with every row created during that write.

use std::collections::HashMap;

use crate::model::Ingredient;

/// Folded-name index over known ingredients
///
/// When the source rows already contain case variants, the first one seen
/// wins, so build it from rows ordered by id.
#[derive(Debug, Default, Clone)]
pub struct IngredientCatalog {
    by_folded_name: HashMap<String, i64>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from existing rows (first occurrence of a name wins)
    pub fn from_ingredients<'a, I>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = &'a Ingredient>,
    {
        let mut catalog = Self::new();
        for ingredient in ingredients {
            catalog.remember(ingredient);
        }
        catalog
    }

    /// Id of the ingredient whose name matches ignoring case
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.by_folded_name.get(&fold(name)).copied()
    }

    /// Record a row; ignored if a case variant is already known
    pub fn remember(&mut self, ingredient: &Ingredient) {
        self.by_folded_name
            .entry(fold(&ingredient.name))
            .or_insert(ingredient.ingredient_id);
    }

    /// Reuse a known id or create the ingredient through `create`
    ///
    /// `create` receives the name exactly as given and must return the new
    /// row id; the catalog remembers it for later lookups.
    pub fn resolve_or_create<F, E>(&mut self, name: &str, create: F) -> Result<i64, E>
    where
        F: FnOnce(&str) -> Result<i64, E>,
    {
        if let Some(id) = self.lookup(name) {
            return Ok(id);
        }
        let id = create(name)?;
        self.by_folded_name.insert(fold(name), id);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.by_folded_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_folded_name.is_empty()
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
