use chrono::Utc;
use listing_scout::{HttpFetcher, MarketplaceScraper};
use tracing::{info, warn, Level};

const DEFAULT_QUERY: &str = "https://boston.craigslist.org/search/sss?query=bicycle";

/// How many listings to pull full details for in one run.
const DETAIL_LIMIT: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let query_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    info!("🔎 Listing Scout");
    info!("query: {query_url}");

    let scraper = MarketplaceScraper::new(HttpFetcher::new()?);

    let listings = scraper.crawl_listings(&query_url).await?;
    info!("✅ found {} listings", listings.len());

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, listing.url);
    }

    let mut details = Vec::new();
    for listing in listings.iter().take(DETAIL_LIMIT) {
        match scraper.extract_attributes(&listing.url).await {
            Ok(d) => details.push(d),
            Err(e) => warn!("skipping {}: {e}", listing.url),
        }
    }

    let report = serde_json::json!({
        "query": query_url,
        "scraped_at": Utc::now(),
        "listings": listings,
        "details": details,
    });
    tokio::fs::write("listings.json", serde_json::to_string_pretty(&report)?).await?;
    info!("💾 saved results to listings.json");

    Ok(())
}
