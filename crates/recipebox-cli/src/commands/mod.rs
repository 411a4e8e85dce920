pub mod ingredient;
pub mod meal;
pub mod recipe;
pub mod seed;
