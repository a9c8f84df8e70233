use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{Result, ScrapeError};
use crate::models::{ListingDetails, ListingRef, RegionDirectory};
use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::SiteProfile;
use crate::scrapers::{details, directory, listings, urls};

/// Marketplace scraper: composes a fetch collaborator with the site's
/// markup profile. Holds no mutable state, so one instance can serve
/// many concurrent queries.
pub struct MarketplaceScraper<F> {
    fetcher: F,
    profile: SiteProfile,
}

impl<F: PageFetcher> MarketplaceScraper<F> {
    /// Scraper with the default (Craigslist) site profile.
    pub fn new(fetcher: F) -> Self {
        Self::with_profile(fetcher, SiteProfile::default())
    }

    pub fn with_profile(fetcher: F, profile: SiteProfile) -> Self {
        Self { fetcher, profile }
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    /// Fetch the site-index page and resolve the region directory.
    pub async fn regions(&self) -> Result<RegionDirectory> {
        let html = self.fetcher.fetch(&self.profile.directory_url).await?;
        directory::resolve_regions(&html, &self.profile)
    }

    /// Crawl a search query to exhaustion, following the "next" chain
    /// page by page and accumulating listings in page order.
    ///
    /// The chain is walked iteratively and strictly sequentially: each
    /// page's next link is only discoverable after fetching that page.
    /// A repeated next URL ends the crawl early (the site is looping),
    /// as does the profile's optional page cap; both return what was
    /// accumulated so far.
    pub async fn crawl_listings(&self, url: &str) -> Result<Vec<ListingRef>> {
        // Every relative link on every page depends on the geography,
        // so failing to derive one is fatal for the whole query.
        let city = urls::city_from_url(&self.profile.domain, url)?
            .ok_or_else(|| ScrapeError::InvalidUrl { url: url.to_string() })?;

        let mut all = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut pages = 0usize;
        let mut next = Some(url.to_string());

        while let Some(page_url) = next {
            if !seen.insert(page_url.clone()) {
                warn!("pagination chain revisited {page_url}, stopping crawl");
                break;
            }
            if let Some(max) = self.profile.max_pages {
                if pages >= max {
                    warn!("pagination chain exceeded {max} pages, stopping crawl");
                    break;
                }
            }

            debug!("crawling results page {page_url}");
            let html = self.fetcher.fetch(&page_url).await?;
            let page = listings::parse_results_page(&html, &city, &self.profile)?;
            debug!("page yielded {} listings", page.listings.len());
            pages += 1;

            all.extend(page.listings);
            next = page
                .next
                .map(|href| urls::to_absolute(&self.profile.domain, &city, &href));
        }

        info!("crawl of {url} found {} listings across {pages} pages", all.len());
        Ok(all)
    }

    /// Fetch one listing detail page and extract its attribute map.
    pub async fn extract_attributes(&self, url: &str) -> Result<ListingDetails> {
        let html = self.fetcher.fetch(url).await?;
        details::parse_listing_page(&html, url, &self.profile)
    }
}
