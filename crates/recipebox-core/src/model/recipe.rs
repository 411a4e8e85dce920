use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;

/// Recipe - a named dish with a free-text description
///
/// `recipe_id == 0` marks a recipe that has not been stored yet; the store
/// assigns the real id on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier (0 until inserted)
    pub recipe_id: i64,

    /// Display name
    pub name: String,

    /// Free-text description (may be empty)
    pub description: String,
}

impl Recipe {
    /// Create an unsaved recipe
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            recipe_id: 0,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Create a recipe that refers to an existing (or explicitly chosen) id
    pub fn with_id(recipe_id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            recipe_id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Whether the store has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.recipe_id != 0
    }
}

/// A recipe joined through its links to its ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeWithIngredients {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeWithIngredients {
    /// Ingredient names in stored order
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }

    /// Drop the ingredient list, keeping the recipe row
    pub fn into_recipe(self) -> Recipe {
        self.recipe
    }
}
