//! Repository layer for SQLite persistence

pub mod sqlite_repo;
pub mod writes;

pub use sqlite_repo::SqliteRepo;
pub use writes::{
    delete_recipe_cascade, insert_recipe_with_ingredients, update_recipe_with_ingredients,
};
