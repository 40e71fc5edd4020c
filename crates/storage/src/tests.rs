#[cfg(test)]
mod storage_tests {
    use crate::{PlantStore, SqliteStorage, StorageBackend};
    use plantarium_core::{baseline_plants, Plant, PlantInput, PlantUpdate};
    use tempfile::TempDir;

    fn create_test_storage() -> (SqliteStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let storage = SqliteStorage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    fn rose_input() -> PlantInput {
        PlantInput {
            name: "rose".to_owned(),
            kind: "Flower".to_owned(),
            price: 10.0,
            family: None,
        }
    }

    #[test]
    fn create_uppercases_name() {
        let (storage, _temp_dir) = create_test_storage();
        let plant = storage.create_plant(rose_input()).unwrap();
        assert_eq!(plant.name, "ROSE");
        assert_eq!(plant.kind, "Flower");
        assert_eq!(plant.price, 10.0);
    }

    #[test]
    fn create_duplicate_fails_distinctly() {
        let (storage, _temp_dir) = create_test_storage();
        storage.create_plant(rose_input()).unwrap();

        // Different input case, same normalized key.
        let mut again = rose_input();
        again.name = "Rose".to_owned();
        let err = storage.create_plant(again).unwrap_err();
        assert!(err.is_duplicate(), "expected duplicate, got: {err}");
    }

    #[test]
    fn find_absent_is_none_not_error() {
        let (storage, _temp_dir) = create_test_storage();
        assert!(storage.find_plant("ORCHID").unwrap().is_none());
    }

    #[test]
    fn find_after_create_uses_stored_uppercase_key() {
        let (storage, _temp_dir) = create_test_storage();
        storage.create_plant(rose_input()).unwrap();
        let found = storage.find_plant("ROSE").unwrap().unwrap();
        assert_eq!(found.name, "ROSE");
        // The pre-normalization key no longer matches anything.
        assert!(storage.find_plant("rose").unwrap().is_none());
    }

    #[test]
    fn update_absent_is_none() {
        let (storage, _temp_dir) = create_test_storage();
        let update = PlantUpdate { price: Some(1.0), ..PlantUpdate::default() };
        assert!(storage.update_plant("ORCHID", update).unwrap().is_none());
    }

    #[test]
    fn update_overlays_single_field() {
        let (storage, _temp_dir) = create_test_storage();
        storage.create_plant(rose_input()).unwrap();
        let update = PlantUpdate { price: Some(99.0), ..PlantUpdate::default() };
        let updated = storage.update_plant("ROSE", update).unwrap().unwrap();
        assert_eq!(updated.price, 99.0);
        assert_eq!(updated.name, "ROSE");
        assert_eq!(updated.kind, "Flower");
        assert!(updated.family.is_none());
    }

    #[test]
    fn update_does_not_renormalize_name() {
        let (storage, _temp_dir) = create_test_storage();
        storage.create_plant(rose_input()).unwrap();
        let update = PlantUpdate { name: Some("rose".to_owned()), ..PlantUpdate::default() };
        let updated = storage.update_plant("ROSE", update).unwrap().unwrap();
        assert_eq!(updated.name, "rose");
        // The record now lives under the lowercase key.
        assert!(storage.find_plant("ROSE").unwrap().is_none());
        assert!(storage.find_plant("rose").unwrap().is_some());
    }

    #[test]
    fn update_can_set_family() {
        let (storage, _temp_dir) = create_test_storage();
        storage.create_plant(rose_input()).unwrap();
        let update =
            PlantUpdate { family: Some("Rosaceae".to_owned()), ..PlantUpdate::default() };
        let updated = storage.update_plant("ROSE", update).unwrap().unwrap();
        assert_eq!(updated.family.as_deref(), Some("Rosaceae"));
    }

    #[test]
    fn delete_returns_record_then_none() {
        let (storage, _temp_dir) = create_test_storage();
        storage.create_plant(rose_input()).unwrap();
        let deleted = storage.delete_plant("ROSE").unwrap().unwrap();
        assert_eq!(deleted.name, "ROSE");
        assert!(storage.delete_plant("ROSE").unwrap().is_none());
    }

    #[test]
    fn seed_twice_inserts_only_first_batch() {
        let (storage, _temp_dir) = create_test_storage();
        let batch = baseline_plants();
        assert_eq!(storage.seed_plants(&batch).unwrap(), batch.len() as u64);
        assert_eq!(storage.seed_plants(&batch).unwrap(), 0);
        let found = storage.find_plant("MONSTERA").unwrap().unwrap();
        assert_eq!(found.kind, "Houseplant");
    }

    #[test]
    fn seed_skips_duplicates_but_inserts_the_rest() {
        let (storage, _temp_dir) = create_test_storage();
        storage
            .seed_plants(&[Plant {
                name: "TULIP".to_owned(),
                kind: "Flower".to_owned(),
                price: 4.75,
                family: None,
            }])
            .unwrap();
        // Full batch: TULIP already present, everything else lands.
        let batch = baseline_plants();
        let inserted = storage.seed_plants(&batch).unwrap();
        assert_eq!(inserted, batch.len() as u64 - 1);
    }

    #[test]
    fn seed_bypasses_normalization() {
        let (storage, _temp_dir) = create_test_storage();
        storage
            .seed_plants(&[Plant {
                name: "lowercase fern".to_owned(),
                kind: "Houseplant".to_owned(),
                price: 5.0,
                family: None,
            }])
            .unwrap();
        assert!(storage.find_plant("lowercase fern").unwrap().is_some());
        assert!(storage.find_plant("LOWERCASE FERN").unwrap().is_none());
    }

    #[test]
    fn reopening_preserves_records() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        {
            let storage = SqliteStorage::new(&db_path).unwrap();
            storage.create_plant(rose_input()).unwrap();
        }
        let storage = SqliteStorage::new(&db_path).unwrap();
        assert!(storage.find_plant("ROSE").unwrap().is_some());
    }

    #[tokio::test]
    async fn backend_dispatches_to_sqlite() {
        let temp_dir = TempDir::new().unwrap();
        let backend = StorageBackend::new_sqlite(&temp_dir.path().join("test.db")).unwrap();
        let plant = backend.create_plant(rose_input()).await.unwrap();
        assert_eq!(plant.name, "ROSE");
        assert!(backend.find_plant("ROSE").await.unwrap().is_some());
        assert!(backend.delete_plant("ROSE").await.unwrap().is_some());
        assert!(backend.delete_plant("ROSE").await.unwrap().is_none());
    }
}
