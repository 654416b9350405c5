//! Inserts a few sample leads for local development.
//!
//! Run with: cargo run --bin seed_leads

use studio_api::config::{self, AppConfig};
use studio_api::modules::lead::{crud::LeadCrud, model::Lead, schema::CreateLeadRequest};

fn sample(
    name: &str,
    email: &str,
    phone: &str,
    shoot_type: &str,
    preferred_date: &str,
    source: &str,
    message: &str,
) -> Lead {
    Lead::from(CreateLeadRequest {
        session_id: format!("seed-{}", name.to_lowercase().replace(' ', "-")),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        shoot_type: Some(shoot_type.to_string()),
        preferred_date: Some(preferred_date.to_string()),
        preferred_time: None,
        source: Some(source.to_string()),
        message: Some(message.to_string()),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let client = config::database::connect(&config.database).await?;
    let db = client.database(&config.database.name);

    let leads = vec![
        sample(
            "Alice Thompson",
            "alice.thompson@example.com",
            "+1-555-0101",
            "wedding",
            "2025-06-15",
            "Google Search",
            "Looking for a photographer for our garden wedding in June.",
        ),
        sample(
            "Bob Martinez",
            "bob.martinez@example.com",
            "+1-555-0102",
            "portrait",
            "2025-04-10",
            "Instagram",
            "Family portrait session for 5 people including grandparents.",
        ),
        sample(
            "Carol Chen",
            "carol.chen@example.com",
            "+1-555-0103",
            "event",
            "2025-05-02",
            "Referral",
            "Product launch evening, roughly 120 guests.",
        ),
    ];

    let inserted = LeadCrud::new(&db).create_many(&leads).await?;
    println!("✓ Inserted {} sample leads into {}", inserted, config.database.name);

    client.shutdown().await;
    Ok(())
}
