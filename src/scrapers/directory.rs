use scraper::Html;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::models::RegionDirectory;
use crate::scrapers::types::{compile, SiteProfile};
use crate::scrapers::urls;

/// Parse the site-index page into a region -> cities directory.
///
/// The page holds a single container div wrapping every region
/// grouping; each region is a header element followed by a block of
/// city anchors. Region boundaries are found by splitting the
/// container's markup on header tags: a split yielding anything other
/// than exactly two parts (name, link block) is stray filler and is
/// dropped, not an error. Anchors whose href carries no geography are
/// silently skipped.
pub fn resolve_regions(html: &str, profile: &SiteProfile) -> Result<RegionDirectory> {
    let document = Html::parse_document(html);

    let container_sel = compile(&format!("div.{}", profile.directory_container_class))?;
    let anchor_sel = compile("a")?;

    let container = document
        .select(&container_sel)
        .next()
        .ok_or(ScrapeError::RegionIndex)?;
    let block = container.inner_html();

    let mut directory = RegionDirectory::new();
    for chunk in block.split("<h4>") {
        let parts: Vec<&str> = chunk.split("</h4>").collect();
        if parts.len() != 2 {
            continue;
        }

        let region = parts[0].trim().to_lowercase();
        if region.is_empty() {
            continue;
        }

        let links = Html::parse_fragment(parts[1]);
        let cities: Vec<_> = links
            .select(&anchor_sel)
            .filter_map(|a| a.value().attr("href"))
            .filter_map(|href| urls::city_from_url(&profile.domain, href).ok().flatten())
            .collect();

        debug!("region {region}: {} cities", cities.len());
        directory.insert(region, cities);
    }

    Ok(directory)
}
