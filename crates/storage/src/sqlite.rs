//! SQLite storage implementation.
//!
//! All methods here are synchronous; the async [`crate::PlantStore`] surface
//! is provided in `sqlite_async.rs` via `spawn_blocking`.

use std::path::Path;

use plantarium_core::{env_parse_with_default, Plant, PlantInput, PlantUpdate};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
type PooledConn = PooledConnection<SqliteConnectionManager>;

/// SQLite store wrapping an r2d2 connection pool.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(StorageError::from)
}

/// Map a database row to a `Plant` (column order: name, type, price, family).
fn row_to_plant(row: &rusqlite::Row<'_>) -> rusqlite::Result<Plant> {
    Ok(Plant {
        name: row.get(0)?,
        kind: row.get(1)?,
        price: row.get(2)?,
        family: row.get(3)?,
    })
}

const SELECT_PLANT: &str = "SELECT name, type, price, family FROM plants WHERE name = ?1";

impl SqliteStorage {
    /// Open (or create) the database at `db_path` and bring the schema up
    /// to date.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(env_parse_with_default("PLANTARIUM_DB_POOL_SIZE", 8))
            .build(manager)?;
        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Insert a new plant, uppercasing the name first.
    pub fn create_plant(&self, input: PlantInput) -> Result<Plant, StorageError> {
        let plant = input.into_record();
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO plants (name, type, price, family) VALUES (?1, ?2, ?3, ?4)",
            params![plant.name, plant.kind, plant.price, plant.family],
        )?;
        Ok(plant)
    }

    /// Fetch a plant by exact stored name.
    pub fn find_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let plant = conn.query_row(SELECT_PLANT, params![name], row_to_plant).optional()?;
        Ok(plant)
    }

    /// Read-modify-write under a transaction. Supplied fields are written
    /// verbatim, including a name that changes the record's key.
    pub fn update_plant(
        &self,
        name: &str,
        update: PlantUpdate,
    ) -> Result<Option<Plant>, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let existing = tx.query_row(SELECT_PLANT, params![name], row_to_plant).optional()?;
        let Some(mut plant) = existing else {
            return Ok(None);
        };
        update.apply_to(&mut plant);
        tx.execute(
            "UPDATE plants SET name = ?1, type = ?2, price = ?3, family = ?4 WHERE name = ?5",
            params![plant.name, plant.kind, plant.price, plant.family, name],
        )?;
        tx.commit()?;
        Ok(Some(plant))
    }

    /// Delete a plant, returning the record as it existed.
    pub fn delete_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let existing = tx.query_row(SELECT_PLANT, params![name], row_to_plant).optional()?;
        let Some(plant) = existing else {
            return Ok(None);
        };
        tx.execute("DELETE FROM plants WHERE name = ?1", params![name])?;
        tx.commit()?;
        Ok(Some(plant))
    }

    /// Insert a batch, skipping names that already exist. Returns the number
    /// of rows actually inserted.
    pub fn seed_plants(&self, plants: &[Plant]) -> Result<u64, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut inserted: u64 = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO plants (name, type, price, family) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for plant in plants {
                inserted +=
                    stmt.execute(params![plant.name, plant.kind, plant.price, plant.family])?
                        as u64;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }
}
