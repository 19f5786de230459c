/*
[INPUT]:  BNC_CUSTOMER, BNC_KEY_HEADER, BNC_KEY environment variables
[OUTPUT]: Spot price, recent history and market table printed to stdout
[POS]:    Examples - end-to-end market data queries
[UPDATE]: When resource client constructors change
*/

use bravenewcoin_client::*;
use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

/// Example: query every resource once.
///
/// Run with `RUST_LOG=bravenewcoin_client=debug` to see request logs.
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Brave New Coin Market Data Example ===\n");

    let customer = std::env::var("BNC_CUSTOMER").unwrap_or_else(|_| "customer".to_string());
    let header = std::env::var("BNC_KEY_HEADER").unwrap_or_else(|_| "X-Api-Key".to_string());
    let key = std::env::var("BNC_KEY").unwrap_or_default();
    let credentials = Credentials::new(header, key);

    let spot = match SpotPriceClient::new(customer.as_str(), credentials.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Querying spot price for btc...");
    match spot.get("btc").await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) if e.is_api_error() => println!("✗ API refused request: {}", e),
        Err(e) => println!("✗ Transport error: {}", e),
    }

    println!("\nQuerying last 24h of btc history...");
    let history = match ExchangeClient::new(customer.as_str(), credentials.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let end_at = Utc::now();
    let query = ExchangeQuery::new("btc")
        .start_at(end_at - Duration::days(1))
        .end_at(end_at);
    match history.get_with(&query).await {
        Ok(data) => println!("✓ History: {}", data),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market table...");
    let market = match MarketClient::new(customer.as_str(), credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    match market.get().await {
        Ok(table) => println!("✓ Market table: {}", table),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
