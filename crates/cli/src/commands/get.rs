use std::path::PathBuf;

use anyhow::Result;
use plantarium_storage::PlantStore;

pub(crate) async fn run(name: &str, db_path: Option<PathBuf>) -> Result<()> {
    let storage = super::open_storage(db_path).await?;
    match storage.find_plant(name).await? {
        Some(plant) => println!("{}", serde_json::to_string_pretty(&plant)?),
        None => anyhow::bail!("plant not found: {name}"),
    }
    Ok(())
}
