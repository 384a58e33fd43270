//! # Seed Uploader
//!
//! One-shot script that writes the static category taxonomy and a fixed set
//! of sample business documents into the remote store. Not part of the
//! running application.
//!
//! ## Usage
//! ```bash
//! # Credentials come from the environment (or a .env file)
//! export VITRINA_API_URL=https://api.example.com
//! export VITRINA_API_KEY=secret
//!
//! cargo run -p vitrina-remote --bin seed
//!
//! # Taxonomy only, skip the sample businesses
//! cargo run -p vitrina-remote --bin seed -- --no-samples
//! ```

use std::env;

use serde_json::json;

use vitrina_core::record::{BusinessRecord, Timestamp};
use vitrina_core::taxonomy::{self, Category};
use vitrina_remote::{DocumentClient, RemoteConfig};

/// Fixed sample listings: (name, category, subcategory, location, rating, reviews, featured).
const SAMPLE_BUSINESSES: &[(&str, &str, &str, &str, f64, i64, bool)] = &[
    ("Casa Verde", "restaurants", "fine_dining", "12 Harbor St", 4.7, 182, true),
    ("Corner Bakehouse", "restaurants", "bakery", "3 Mill Lane", 4.5, 96, true),
    ("Brisa Café", "restaurants", "cafe", "48 Elm Ave", 4.3, 41, false),
    ("Shear Genius", "beauty", "hair_salon", "221 Birch Rd", 4.8, 143, true),
    ("Fade District", "beauty", "barber", "7 Dock St", 4.6, 77, false),
    ("Bright Smile Dental", "health", "dentist", "90 Cedar Blvd", 4.4, 211, false),
    ("PipeWorks Plumbing", "home_services", "plumbing", "Unit 4, Trade Park", 4.2, 58, false),
    ("Apex Auto Care", "auto", "repair_shop", "15 Foundry Way", 4.5, 132, true),
    ("Greenline Grocers", "shopping", "organic", "102 Market Sq", 4.1, 64, false),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env first, then real environment wins
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut upload_samples = true;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--no-samples" => upload_samples = false,
            "--help" | "-h" => {
                println!("Vitrina Seed Uploader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --no-samples    Upload the taxonomy only");
                println!("  -h, --help      Show this help message");
                println!();
                println!("Environment:");
                println!("  VITRINA_API_URL    Backend base URL (required)");
                println!("  VITRINA_API_KEY    Bearer token (optional)");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(2);
            }
        }
    }

    println!("🌱 Vitrina Seed Uploader");
    println!("========================");

    let config = RemoteConfig::from_env()?;
    println!("Backend: {}", config.base_url);
    println!();

    let client = DocumentClient::new(&config)?;

    // Taxonomy
    println!("Uploading category taxonomy...");
    let categories = taxonomy::categories();
    for category in categories {
        upload_category(&client, category).await?;
        println!("  ✓ {} ({} subcategories)", category.name, category.subcategories.len());
    }
    println!("✓ Taxonomy uploaded: {} categories", categories.len());

    // Sample businesses
    if upload_samples {
        println!();
        println!("Uploading sample businesses...");

        let mut uploaded = 0;
        for sample in SAMPLE_BUSINESSES {
            let record = sample_business(sample);
            if let Err(e) = client.put("businesses", &record.id, &record).await {
                eprintln!("  Failed to upload {}: {}", record.name, e);
                continue;
            }
            uploaded += 1;
            println!("  ✓ {}", record.name);
        }

        println!("✓ Uploaded {} sample businesses", uploaded);
    }

    println!();
    println!("✓ Seed complete!");
    Ok(())
}

/// Uploads one category document plus its subcategory subcollection.
async fn upload_category(
    client: &DocumentClient,
    category: &Category,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = json!({
        "id": category.id,
        "name": category.name,
        "icon": category.icon,
        "sort_order": category.sort_order,
        "rating_criteria": category.rating_criteria,
    });
    client.put("categories", &category.id, &doc).await?;

    let subcollection = format!("categories/{}/subcategories", category.id);
    for sub in &category.subcategories {
        client.put(&subcollection, &sub.id, sub).await?;
    }

    Ok(())
}

/// Builds a deterministic sample business record.
fn sample_business(
    (name, category_id, subcategory_id, location, rating, review_count, is_featured): &(
        &str,
        &str,
        &str,
        &str,
        f64,
        i64,
        bool,
    ),
) -> BusinessRecord {
    let now = Timestamp::now();
    let slug = name.to_lowercase().replace(' ', "-");

    BusinessRecord {
        id: format!("sample-{}", slug),
        name: name.to_string(),
        description: format!("{} - a Vitrina sample listing.", name),
        category_id: category_id.to_string(),
        subcategory_id: subcategory_id.to_string(),
        location: location.to_string(),
        latitude: None,
        longitude: None,
        image_urls: vec![format!("https://img.vitrina.example/{}.jpg", slug)],
        rating: *rating,
        review_count: *review_count,
        is_featured: *is_featured,
        is_open: true,
        owner_id: "seed-owner".to_string(),
        created_at: now,
        updated_at: now,
    }
}
