pub mod ingredient;
pub mod link;
pub mod recipe;

pub use ingredient::Ingredient;
pub use link::RecipeIngredientLink;
pub use recipe::{Recipe, RecipeWithIngredients};
