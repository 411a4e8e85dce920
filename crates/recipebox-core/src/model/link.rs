use serde::{Deserialize, Serialize};

/// Association row tying one recipe to one ingredient
///
/// The pair is the whole identity; a recipe's links form a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeIngredientLink {
    pub recipe_id: i64,
    pub ingredient_id: i64,
}

impl RecipeIngredientLink {
    pub fn new(recipe_id: i64, ingredient_id: i64) -> Self {
        Self {
            recipe_id,
            ingredient_id,
        }
    }
}
