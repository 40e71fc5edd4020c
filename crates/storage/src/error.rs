//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes — most importantly the
//! unique-key violation, which bulk seeding treats as benign while the
//! single-create path does not.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique-key violation on `name`.
    #[error("duplicate plant: {0}")]
    Duplicate(String),

    /// Driver / connection / constraint failure other than a duplicate key.
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Connection pool exhausted or unavailable.
    #[error("connection pool error: {0}")]
    Pool(String),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// Blocking task join failure.
    #[error("blocking task failed: {0}")]
    Runtime(String),
}

impl StorageError {
    /// Whether this error is a unique-key violation.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Custom `From<rusqlite::Error>` — NOT blanket `#[from]`.
///
/// SQLITE_CONSTRAINT_PRIMARYKEY / SQLITE_CONSTRAINT_UNIQUE → `Duplicate`,
/// everything else → `Database`.
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Self::Duplicate(msg.clone().unwrap_or_else(|| e.to_string()))
            },
            _ => Self::Database(Box::new(err)),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Pool(err.to_string())
    }
}

/// SQLSTATE 23505 (unique violation) → `Duplicate`, everything else →
/// `Database`.
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Database(Box::new(err)),
        }
    }
}
