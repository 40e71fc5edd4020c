use std::sync::Arc;

use plantarium_core::{baseline_plants, Plant, PlantInput, PlantUpdate};
use plantarium_storage::{PlantStore, StorageBackend};

use crate::ServiceError;

/// Catalog operations over an injected storage backend.
pub struct PlantService {
    storage: Arc<StorageBackend>,
}

impl PlantService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, input: PlantInput) -> Result<Plant, ServiceError> {
        Ok(self.storage.create_plant(input).await?)
    }

    pub async fn get(&self, name: &str) -> Result<Plant, ServiceError> {
        self.storage
            .find_plant(name)
            .await?
            .ok_or_else(|| ServiceError::NotFound { name: name.to_owned() })
    }

    pub async fn update(&self, name: &str, update: PlantUpdate) -> Result<Plant, ServiceError> {
        self.storage
            .update_plant(name, update)
            .await?
            .ok_or_else(|| ServiceError::NotFound { name: name.to_owned() })
    }

    pub async fn delete(&self, name: &str) -> Result<Plant, ServiceError> {
        self.storage
            .delete_plant(name)
            .await?
            .ok_or_else(|| ServiceError::NotFound { name: name.to_owned() })
    }

    /// Seed the baseline catalog. Names already present are skipped; returns
    /// the number of records actually inserted.
    pub async fn seed_baseline(&self) -> Result<u64, ServiceError> {
        let inserted = self.storage.seed_plants(&baseline_plants()).await?;
        if inserted > 0 {
            tracing::info!(inserted, "seeded baseline plants");
        } else {
            tracing::debug!("baseline plants already present");
        }
        Ok(inserted)
    }
}
