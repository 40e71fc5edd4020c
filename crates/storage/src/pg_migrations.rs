//! PostgreSQL schema migrations.

use sqlx::PgPool;

use crate::error::StorageError;

/// Bring the schema up to date. Idempotent — safe to run on every startup.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS plants (
            name TEXT PRIMARY KEY,
            type TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            family TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(())
}
