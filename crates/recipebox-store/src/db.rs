//! Database connection management
//!
//! Every connection handed out here has foreign keys enforced and the
//! schema migrated, so callers never see a half-initialised store.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::path::Path;

/// Open (creating if needed) a SQLite database at `path` and migrate it
///
/// Missing parent directories are created.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let mut conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(from_rusqlite)?;
    apply_migrations(&mut conn)?;

    tracing::debug!(path = %path.display(), "opened recipe store");
    Ok(conn)
}

/// Open a migrated in-memory database (tests, throwaway sessions)
pub fn open_in_memory() -> Result<Connection> {
    let mut conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Per-connection settings
pub fn configure(conn: &Connection) -> Result<()> {
    // Links must always point at live recipes and ingredients
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    // Built-in LIKE folds ASCII only; rb_fold(x) lowercases any script
    conn.create_scalar_function(
        "rb_fold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_enforces_foreign_keys() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_fold_function_lowercases_non_ascii() {
        let conn = open_in_memory().unwrap();
        let folded: String = conn
            .query_row("SELECT rb_fold('ŘÍZEK Česnečka')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(folded, "řízek česnečka");
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.db");

        let conn = open(&path).unwrap();
        drop(conn);

        assert!(path.exists());
    }
}
