//! Error handling for recipebox-store
//!
//! Wraps recipebox-core RbError with store-specific helpers

use recipebox_core::errors::{RbError, RbErrorKind, RecipeBoxError};

/// Result type alias using RbError
pub type Result<T> = std::result::Result<T, RbError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> RbError {
    RbError::new(RbErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> RbError {
    RbError::new(RbErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: impl Into<String>) -> RbError {
    RecipeBoxError::InvalidSeed {
        reason: reason.into(),
    }
    .into()
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures (foreign key, NOT NULL, primary key) get their own
/// kind so callers can tell bad input from a broken database.
pub fn from_rusqlite(err: rusqlite::Error) -> RbError {
    let kind = match err.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ConstraintViolation) => RbErrorKind::ConstraintViolation,
        _ => RbErrorKind::Persistence,
    };
    RbError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> RbError {
    RbError::new(RbErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: impl std::fmt::Display) -> RbError {
    RbError::new(RbErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
