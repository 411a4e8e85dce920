//! Pure in-memory operations shared by the store and the repository layer

pub mod catalog;
pub mod recipe_sets;

pub use catalog::IngredientCatalog;
pub use recipe_sets::{distinct_by_name, distinct_names, intersect_recipes};
