use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::scrapers::traits::PageFetcher;

/// Production fetcher backed by reqwest. Redirects are followed by the
/// client; transport errors and non-2xx statuses propagate unchanged
/// with no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!("downloaded {} bytes from {url}", body.len());
        Ok(body)
    }
}
