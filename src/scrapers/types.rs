use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

/// Markup constants for the marketplace's page-template family.
///
/// The class tokens and the attribute-group index are assumptions about
/// the live site's markup and may go stale, so they are configuration
/// with Craigslist defaults rather than hard-coded invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Registrable site domain, e.g. `craigslist.org`.
    pub domain: String,
    /// The site-index page listing every region and its cities.
    pub directory_url: String,
    /// Class of the div wrapping all region groupings on the site index.
    pub directory_container_class: String,
    /// Class marking listing-headline anchors on search result pages.
    pub listing_link_class: String,
    /// Class of the price span on listing detail pages.
    pub price_class: String,
    /// Class of the attribute-group paragraphs on listing detail pages.
    pub attr_group_class: String,
    /// Index of the key-value attribute group among all groups on the
    /// page (the first group holds non-key-value metadata).
    pub attr_group_index: usize,
    /// Upper bound on result pages followed per query. `None` crawls the
    /// "next" chain to exhaustion.
    pub max_pages: Option<usize>,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            domain: "craigslist.org".to_string(),
            directory_url: "https://www.craigslist.org/about/sites".to_string(),
            directory_container_class: "colmask".to_string(),
            listing_link_class: "hdrlnk".to_string(),
            price_class: "price".to_string(),
            attr_group_class: "attrgroup".to_string(),
            attr_group_index: 1,
            max_pages: None,
        }
    }
}

/// Compile a CSS selector, surfacing bad configured class tokens as a
/// typed error instead of panicking.
pub(crate) fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(e.to_string()))
}
