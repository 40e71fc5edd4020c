use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use plantarium_service::PlantService;

pub(crate) async fn run(db_path: Option<PathBuf>) -> Result<()> {
    let storage = Arc::new(super::open_storage(db_path).await?);
    let plants = PlantService::new(storage);
    let inserted = plants.seed_baseline().await?;
    println!("seeded {inserted} plants");
    Ok(())
}
