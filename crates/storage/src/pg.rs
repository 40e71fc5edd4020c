//! PostgreSQL storage backend using sqlx.

use async_trait::async_trait;
use plantarium_core::{env_parse_with_default, Plant, PlantInput, PlantUpdate};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::traits::PlantStore;

/// PostgreSQL store wrapping a sqlx connection pool.
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect and bring the schema up to date.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(env_parse_with_default("PLANTARIUM_PG_POOL_SIZE", 8))
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

fn row_to_plant(row: &sqlx::postgres::PgRow) -> Result<Plant, sqlx::Error> {
    Ok(Plant {
        name: row.try_get("name")?,
        kind: row.try_get("type")?,
        price: row.try_get("price")?,
        family: row.try_get("family")?,
    })
}

#[async_trait]
impl PlantStore for PgStorage {
    async fn create_plant(&self, input: PlantInput) -> Result<Plant, StorageError> {
        let plant = input.into_record();
        sqlx::query("INSERT INTO plants (name, type, price, family) VALUES ($1, $2, $3, $4)")
            .bind(&plant.name)
            .bind(&plant.kind)
            .bind(plant.price)
            .bind(&plant.family)
            .execute(&self.pool)
            .await?;
        Ok(plant)
    }

    async fn find_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        let row = sqlx::query("SELECT name, type, price, family FROM plants WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_plant).transpose().map_err(StorageError::from)
    }

    async fn update_plant(
        &self,
        name: &str,
        update: PlantUpdate,
    ) -> Result<Option<Plant>, StorageError> {
        // Single statement: absent fields keep their stored values, supplied
        // ones are written verbatim (no re-normalization of the name).
        let row = sqlx::query(
            "UPDATE plants
             SET name = COALESCE($2, name),
                 type = COALESCE($3, type),
                 price = COALESCE($4, price),
                 family = COALESCE($5, family)
             WHERE name = $1
             RETURNING name, type, price, family",
        )
        .bind(name)
        .bind(&update.name)
        .bind(&update.kind)
        .bind(update.price)
        .bind(&update.family)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_plant).transpose().map_err(StorageError::from)
    }

    async fn delete_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        let row = sqlx::query(
            "DELETE FROM plants WHERE name = $1 RETURNING name, type, price, family",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_plant).transpose().map_err(StorageError::from)
    }

    async fn seed_plants(&self, plants: &[Plant]) -> Result<u64, StorageError> {
        let mut inserted: u64 = 0;
        for plant in plants {
            let result = sqlx::query(
                "INSERT INTO plants (name, type, price, family) VALUES ($1, $2, $3, $4)
                 ON CONFLICT (name) DO NOTHING",
            )
            .bind(&plant.name)
            .bind(&plant.kind)
            .bind(plant.price)
            .bind(&plant.family)
            .execute(&self.pool)
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }
}
