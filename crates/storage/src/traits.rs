//! Record-store trait for the plant collection.

use async_trait::async_trait;
use plantarium_core::{Plant, PlantInput, PlantUpdate};

use crate::error::StorageError;

/// Operations on the plant collection, keyed by `name`.
///
/// Absence is a sentinel (`None`), not an error — callers decide whether a
/// missing record is a failure.
#[async_trait]
pub trait PlantStore: Send + Sync {
    /// Insert a new plant. The name is folded to uppercase before
    /// persisting. A name collision returns [`StorageError::Duplicate`].
    async fn create_plant(&self, input: PlantInput) -> Result<Plant, StorageError>;

    /// Fetch a plant by exact stored name.
    async fn find_plant(&self, name: &str) -> Result<Option<Plant>, StorageError>;

    /// Apply a field-wise update to the plant stored under `name`.
    ///
    /// Supplied fields are written verbatim — the name is NOT re-normalized.
    /// Returns the record after the update.
    async fn update_plant(
        &self,
        name: &str,
        update: PlantUpdate,
    ) -> Result<Option<Plant>, StorageError>;

    /// Delete a plant by name. Returns the record as it existed before
    /// deletion.
    async fn delete_plant(&self, name: &str) -> Result<Option<Plant>, StorageError>;

    /// Insert a batch of pre-normalized plants. Every record is attempted;
    /// names already present are skipped. Returns the number of rows
    /// actually inserted.
    async fn seed_plants(&self, plants: &[Plant]) -> Result<u64, StorageError>;
}
