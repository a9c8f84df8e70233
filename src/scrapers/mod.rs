pub mod details;
pub mod directory;
pub mod fetch;
pub mod listings;
pub mod marketplace;
pub mod traits;
pub mod types;
pub mod urls;

pub use fetch::HttpFetcher;
pub use marketplace::MarketplaceScraper;
pub use traits::PageFetcher;
pub use types::SiteProfile;
