//! Loads the reference catalog into the durable store, replacing whatever
//! catalog rows are already there. User, booking, complaint and review data
//! is left untouched.

use log::info;

use sthanamitra::{params, repo, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cfg = params::configurables();
    if cfg.database_url.is_none() {
        return Err("DATABASE_URL must be set to seed the durable store".into());
    }
    let repo = repo::Repository::from_env();

    let removed_cities = repo::city_clear(&repo).await?;
    let removed_properties = repo::property_clear(&repo).await?;
    info!("cleared {removed_cities} cities and {removed_properties} properties");

    let cities = seed::cities();
    for city in &cities {
        repo::city_create(&repo, city).await?;
    }
    let properties = seed::properties();
    for property in &properties {
        repo::property_create(&repo, property).await?;
    }

    info!("seeded {} cities and {} properties", cities.len(), properties.len());
    Ok(())
}
