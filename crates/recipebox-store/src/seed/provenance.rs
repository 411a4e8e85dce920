//! Seed import provenance
//!
//! Records applied catalogs in the `seed_imports` table

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

/// One applied seed catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedImportRecord {
    pub digest: String,
    pub catalog_name: String,
    pub recipe_count: i64,
    /// Unix seconds
    pub applied_at: i64,
}

/// Whether a catalog with this digest has already been imported
pub fn is_applied(conn: &Connection, digest: &str) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM seed_imports WHERE digest = ?1",
            [digest],
            |_| Ok(()),
        )
        .optional()
        .map_err(from_rusqlite)?;
    Ok(found.is_some())
}

/// Record an import; call inside the import transaction
pub fn record_import(
    conn: &Connection,
    digest: &str,
    catalog_name: &str,
    recipe_count: usize,
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO seed_imports (digest, catalog_name, recipe_count, applied_at) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![digest, catalog_name, recipe_count as i64, now],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// All recorded imports, oldest first
pub fn list_imports(conn: &Connection) -> Result<Vec<SeedImportRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT digest, catalog_name, recipe_count, applied_at FROM seed_imports
             ORDER BY applied_at, rowid",
        )
        .map_err(from_rusqlite)?;

    let records = stmt
        .query_map([], |row| {
            Ok(SeedImportRecord {
                digest: row.get(0)?,
                catalog_name: row.get(1)?,
                recipe_count: row.get(2)?,
                applied_at: row.get(3)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(records)
}
