//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use plantarium_core::{Plant, PlantInput, PlantUpdate};

use crate::error::StorageError;
use crate::traits::PlantStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) =>
                <crate::SqliteStorage as PlantStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) =>
                <crate::PgStorage as PlantStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::SqliteStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }
}

#[async_trait]
impl PlantStore for StorageBackend {
    async fn create_plant(&self, input: PlantInput) -> Result<Plant, StorageError> {
        dispatch!(self, create_plant(input))
    }

    async fn find_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        dispatch!(self, find_plant(name))
    }

    async fn update_plant(
        &self,
        name: &str,
        update: PlantUpdate,
    ) -> Result<Option<Plant>, StorageError> {
        dispatch!(self, update_plant(name, update))
    }

    async fn delete_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        dispatch!(self, delete_plant(name))
    }

    async fn seed_plants(&self, plants: &[Plant]) -> Result<u64, StorageError> {
        dispatch!(self, seed_plants(plants))
    }
}
