//! Example: Query the tzKT mainnet API for various information.
//!
//! Run with: cargo run --example mainnet
//! Set `RUST_LOG=tzkt_client=debug` to see each request.

use tzkt_client::query_helpers::{Comparator, Filters, SortOrder};
use tzkt_client::types::{QuoteCurrency, Transaction};
use tzkt_client::{TzktClient, client::Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = TzktClient::mainnet();

    println!("=== tzKT Mainnet Client ===\n");

    // 1. Indexer head
    println!("1. Fetching indexer head...");
    let head = client.head().await?;
    println!("   Level: {}", head.level);
    println!("   Cycle: {}", head.cycle);
    println!("   Protocol: {}", head.protocol);
    println!("   Synced: {} (lag {} levels)", head.synced, head.lag());
    println!("   XTZ/USD: {}", head.quote_usd);
    println!();

    // 2. Latest blocks
    println!("2. Fetching latest blocks...");
    let filters = Filters::new()
        .with_modifier("level", Comparator::Gt, head.level - 5)
        .sort(SortOrder::Desc, "level");
    for block in client.blocks(&filters, &[QuoteCurrency::Usd]).await? {
        let baker = block.baker.as_ref().map_or("?", |b| b.address.as_str());
        println!("   {} {} baked by {}", block.level, block.hash, baker);
    }
    println!();

    // 3. Largest recent transactions
    println!("3. Fetching large transactions...");
    let filters = Filters::new()
        .with_modifier("level", Comparator::Gt, head.level - 100)
        .with_modifier("amount", Comparator::Ge, 1_000_000_000i64)
        .limit(5);
    for tx in client.operations::<Transaction>(&filters).await? {
        let target = tx.target.as_ref().map_or("?", |t| t.address.as_str());
        println!("   {} -> {}: {}", tx.sender.address, target, tx.amount);
    }
    println!();

    // 4. Voting
    println!("4. Fetching current voting period...");
    let period = client.current_voting_period().await?;
    println!("   Period {} ({}) of epoch {}", period.index, period.kind, period.epoch);
    println!();

    // 5. Counts
    println!("5. Fetching counts...");
    let delegates = client.delegate_count(Some(true)).await?;
    let contracts = client.contract_count(&Filters::new()).await?;
    println!("   Active delegates: {delegates}");
    println!("   Contracts: {contracts}");

    println!("\n=== Done! ===");
    Ok(())
}
