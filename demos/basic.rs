//! Basic example demonstrating the website update client.
//!
//! Run with:
//! ```
//! SITEUPDATE_BASE_URL=http://localhost:3000 cargo run --example basic -- site-42
//! ```

use serde_json::json;
use siteupdate::{UpdateClient, UpdateOptions, UpdateResult};

#[tokio::main]
async fn main() -> siteupdate::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let website_id = std::env::args().nth(1).unwrap_or_else(|| "site-42".to_string());

    let client = UpdateClient::from_env()?;
    let options = UpdateOptions::default();
    println!("Endpoint: {}", client.resolver(&options).endpoint());

    // Partial update: only these keys change on the remote record
    let updates = json!({
        "tagline": "Now open",
        "published": true
    });
    let updates = updates.as_object().cloned().unwrap_or_default();

    println!("\n--- Updating {website_id} ---");
    match client.update(&website_id, updates, &options).await {
        UpdateResult::Success {
            message, record, ..
        } => {
            println!("{message}");
            if let Some(record) = record {
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
        }
        UpdateResult::Failure { error, .. } => println!("Update failed: {error}"),
    }

    // Send a whole document without notifying anyone
    println!("\n--- Applying website-data.json ---");
    let quiet = UpdateOptions::default().with_send_notification(false);
    let result = client.update_from_file(None, &quiet).await;
    println!("success: {}", result.is_success());

    Ok(())
}
