pub mod get;
pub mod seed;
pub mod serve;

use std::path::PathBuf;

use anyhow::Result;
use plantarium_storage::StorageBackend;

/// Open the configured storage backend.
///
/// `PLANTARIUM_DATABASE_URL` selects PostgreSQL when the binary is built
/// with the `postgres` feature; otherwise SQLite at `db_path`.
pub(crate) async fn open_storage(db_path: Option<PathBuf>) -> Result<StorageBackend> {
    #[cfg(feature = "postgres")]
    if let Ok(url) = std::env::var("PLANTARIUM_DATABASE_URL") {
        tracing::info!("using PostgreSQL backend");
        return Ok(StorageBackend::new_postgres(&url).await?);
    }

    let path = db_path.unwrap_or_else(crate::default_db_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!(path = %path.display(), "using SQLite backend");
    Ok(StorageBackend::new_sqlite(&path)?)
}
