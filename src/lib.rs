pub mod error;
pub mod models;
pub mod scrapers;

pub use error::{Result, ScrapeError};
pub use models::{Geography, ListingDetails, ListingRef, Price, RegionDirectory};
pub use scrapers::{HttpFetcher, MarketplaceScraper, PageFetcher, SiteProfile};
