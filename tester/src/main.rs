//! Manual smoke run against a live server.
//!
//! Start the server (seeded), then:
//! ```sh
//! cargo run -p tester -- http://localhost:5000
//! ```
//! Walks health -> register -> login -> search -> detail -> booking ->
//! my-bookings and prints what came back at each step.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let client = Client::new();

    let health: Value = client.get(format!("{base}/health")).send().await?.json().await?;
    println!("health: {}", health["status"]);

    let email = format!("smoke-{}@example.com", Uuid::new_v4());
    let registered: Value = client
        .post(format!("{base}/api/auth/register"))
        .json(&json!({
            "email": email,
            "password": "password123",
            "firstName": "Smoke",
            "lastName": "Test",
        }))
        .send()
        .await?
        .json()
        .await?;
    println!("registered: {}", registered["data"]["user"]["email"]);

    let login: Value = client
        .post(format!("{base}/api/auth/login"))
        .json(&json!({ "email": email, "password": "password123" }))
        .send()
        .await?
        .json()
        .await?;
    let token = login["data"]["token"]
        .as_str()
        .context("login returned no token")?
        .to_string();
    println!("logged in, token length {}", token.len());

    let search: Value = client
        .get(format!("{base}/api/salons"))
        .query(&[
            ("query", "hair"),
            ("latitude", "40.7128"),
            ("longitude", "-74.0060"),
            ("radius", "25"),
            ("sortBy", "rating"),
        ])
        .send()
        .await?
        .json()
        .await?;
    let salons = search["data"]["salons"]
        .as_array()
        .context("search returned no salon list")?;
    println!(
        "search: {} salons (message: {})",
        salons.len(),
        search["message"]
    );
    for salon in salons {
        println!(
            "  {} rating={} distance={}",
            salon["name"], salon["rating"], salon["distance"]
        );
    }

    let Some(first) = salons.first() else {
        println!("no salons to book against, stopping here");
        return Ok(());
    };
    let salon_id = first["id"].as_str().unwrap_or_default();

    let detail: Value = client
        .get(format!("{base}/api/salons/{salon_id}"))
        .send()
        .await?
        .json()
        .await?;
    let data = &detail["data"];
    println!(
        "detail: {} with {} reviews, {} stylists",
        data["name"],
        data["reviews"].as_array().map_or(0, Vec::len),
        data["stylists"].as_array().map_or(0, Vec::len),
    );

    let stylist_id = data["stylists"][0]["id"].as_str().unwrap_or_default();
    let service_id = data["services"][0]["id"].as_str().unwrap_or_default();
    if stylist_id.is_empty() || service_id.is_empty() {
        println!("salon has no bookable stylist/service (demo data?), stopping here");
        return Ok(());
    }

    let booking: Value = client
        .post(format!("{base}/api/bookings"))
        .bearer_auth(&token)
        .json(&json!({
            "salonId": salon_id,
            "stylistId": stylist_id,
            "serviceIds": [service_id],
            "datetime": "2026-09-01T15:00:00Z",
            "notes": "smoke test booking",
        }))
        .send()
        .await?
        .json()
        .await?;
    if booking["success"] != Value::Bool(true) {
        bail!("booking failed: {booking}");
    }
    println!(
        "booked: {} total={}",
        booking["data"]["id"], booking["data"]["totalPrice"]
    );

    let mine: Value = client
        .get(format!("{base}/api/bookings/me"))
        .bearer_auth(&token)
        .send()
        .await?
        .json()
        .await?;
    println!(
        "my bookings: {}",
        mine["data"].as_array().map_or(0, Vec::len)
    );

    Ok(())
}
