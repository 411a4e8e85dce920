//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

/// Migration metadata
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_recipe_schema",
            sql: include_str!("../../migrations/001_recipe_schema.sql"),
        },
        Migration {
            id: "002_seed_imports",
            sql: include_str!("../../migrations/002_seed_imports.sql"),
        },
    ]
}
