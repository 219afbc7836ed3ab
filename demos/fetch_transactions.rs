use monoapi::Client;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let secret = env::var("MONO_SECRET_KEY")
        .map_err(|_| "Set MONO_SECRET_KEY in your environment or .env file")?;
    let account_id = env::args()
        .nth(1)
        .ok_or("Usage: fetch_transactions <account-id>")?;

    let client = Client::with_secret_key(secret)?;

    // First page of debits only.
    let response = client
        .transactions(&account_id, "", "", "", "debit", true)
        .await?;

    println!(
        "Fetched {} of {} transactions (page {}):",
        response.data.len(),
        response.paging.total,
        response.paging.page
    );
    for txn in &response.data {
        println!(
            "{} | {} {} {}",
            txn.id,
            txn.date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            txn.amount,
            txn.narration
        );
    }
    if let Some(next) = &response.paging.next {
        println!("Next page: {next}");
    }

    Ok(())
}
