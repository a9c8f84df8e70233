use thiserror::Error;

/// Errors produced while crawling and extracting marketplace pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The site-index page is missing the directory container block,
    /// so no regions can be resolved from it.
    #[error("region index page is missing its directory container")]
    RegionIndex,

    /// A URL does not match the site's authority shape, or a geography
    /// was required but the URL carries no subdomain.
    #[error("invalid marketplace url: {url}")]
    InvalidUrl { url: String },

    /// A listing detail page lacks its key-value attribute group. This
    /// usually means the listing was deleted or expired and the server
    /// returned something other than a detail page.
    #[error("listing page is missing its attribute group: {url}")]
    MalformedListing { url: String },

    /// A configured class token did not compile into a valid selector.
    #[error("invalid selector: {0}")]
    Selector(String),

    /// HTTP transport failure, propagated unchanged from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure from a non-reqwest fetcher implementation.
    #[error("fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
