use mongodb::{error::Result, Client};

use crate::config::DatabaseConfig;

/// Builds the MongoDB client. The driver connects lazily, so this only fails
/// on a malformed connection string.
pub async fn connect(config: &DatabaseConfig) -> Result<Client> {
    let client = Client::with_uri_str(&config.url).await?;
    tracing::info!(database = %config.name, "mongodb client ready");
    Ok(client)
}
