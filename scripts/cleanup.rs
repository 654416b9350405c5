//! Drops the collections this service writes to. Development only.
//!
//! Run with: cargo run --bin cleanup

use mongodb::bson::Document;
use studio_api::config::{self, AppConfig};

const COLLECTIONS: [&str; 3] = ["messages", "leads", "feedback"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    println!("Connecting to MongoDB ({})...", config.database.name);
    let client = config::database::connect(&config.database).await?;
    let db = client.database(&config.database.name);

    for name in COLLECTIONS {
        db.collection::<Document>(name).drop().await?;
        println!("✓ {} dropped", name);
    }

    println!("\nCollections remaining:");
    for name in db.list_collection_names().await? {
        println!("  - {}", name);
    }

    client.shutdown().await;
    println!("\n✓ Cleanup complete!");
    Ok(())
}
