use crate::error::Result;
use async_trait::async_trait;

/// Fetch collaborator: performs the actual network I/O and hands back
/// raw HTML. Redirect handling, TLS and retries all live behind this
/// boundary, not in the crawl logic.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}
