//! RecipeBox Core - domain model and shared facilities
//!
//! This crate provides the foundational pieces every other RecipeBox crate
//! builds on:
//! - Recipe, Ingredient and link models
//! - Structured error facility (`RbError` / `RbErrorKind`)
//! - Structured logging facility with test capture
//! - Pure in-memory ops: case-insensitive ingredient catalog, list intersection
//! - Parsing of the external random-meal record

pub mod errors;
pub mod logging_facility;
pub mod meal;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use recipebox_core_types::schema;
pub use errors::{RbError, RbErrorKind, RecipeBoxError, Result};
pub use model::{Ingredient, Recipe, RecipeIngredientLink, RecipeWithIngredients};
