//! RecipeBox Store - SQLite persistence for recipes and ingredients
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations
//! - `SqliteRepo`: primitive reads/writes over the three tables
//! - Transactional recipe writes with case-insensitive ingredient reuse
//! - YAML seed catalog import (including the built-in sample catalog)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
