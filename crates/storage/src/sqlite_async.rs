//! Async `PlantStore` implementation for [`SqliteStorage`] via `spawn_blocking`.

use async_trait::async_trait;
use plantarium_core::{Plant, PlantInput, PlantUpdate};

use crate::error::StorageError;
use crate::sqlite::SqliteStorage;
use crate::traits::PlantStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Runtime(format!("spawn_blocking join error: {e}")))?
}

#[async_trait]
impl PlantStore for SqliteStorage {
    async fn create_plant(&self, input: PlantInput) -> Result<Plant, StorageError> {
        let s = self.clone();
        blocking(move || s.create_plant(input)).await
    }

    async fn find_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        let s = self.clone();
        let name = name.to_owned();
        blocking(move || s.find_plant(&name)).await
    }

    async fn update_plant(
        &self,
        name: &str,
        update: PlantUpdate,
    ) -> Result<Option<Plant>, StorageError> {
        let s = self.clone();
        let name = name.to_owned();
        blocking(move || s.update_plant(&name, update)).await
    }

    async fn delete_plant(&self, name: &str) -> Result<Option<Plant>, StorageError> {
        let s = self.clone();
        let name = name.to_owned();
        blocking(move || s.delete_plant(&name)).await
    }

    async fn seed_plants(&self, plants: &[Plant]) -> Result<u64, StorageError> {
        let s = self.clone();
        let plants = plants.to_vec();
        blocking(move || s.seed_plants(&plants)).await
    }
}
