use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A subdomain-derived token identifying a regional partition of the
/// marketplace site (e.g. a city). Always non-empty and dot-free;
/// constructed only by the URL parser.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geography(String);

impl Geography {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Geography(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Region name (lower-cased) to the ordered cities serving it.
pub type RegionDirectory = BTreeMap<String, Vec<Geography>>;

/// One search result: a listing's headline and its absolute URL.
/// Order matters; references are accumulated in page-traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRef {
    pub title: String,
    pub url: String,
}

/// A listing's asking price. Sellers may omit the price entirely, which
/// is a normal listing state and distinct from any listed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Price {
    /// The raw price string as shown on the page, e.g. `$1,200`.
    Listed(String),
    Missing,
}

impl Price {
    pub fn is_missing(&self) -> bool {
        matches!(self, Price::Missing)
    }
}

/// Everything extracted from one listing detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDetails {
    pub url: String,
    pub price: Price,
    /// Short-form posting description; empty when the page carries none.
    pub description: String,
    /// Listing-specific key-value attributes. The key set varies per
    /// listing and is not known in advance.
    pub attributes: BTreeMap<String, String>,
}
