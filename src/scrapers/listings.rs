use scraper::Html;

use crate::error::Result;
use crate::models::{Geography, ListingRef};
use crate::scrapers::types::{compile, SiteProfile};
use crate::scrapers::urls;

/// One parsed search-results page: its listings in DOM order, plus the
/// href of the next page when the chain continues.
#[derive(Debug)]
pub struct ResultsPage {
    pub listings: Vec<ListingRef>,
    pub next: Option<String>,
}

/// Parse a single search-results page.
///
/// Listing anchors are recognized purely by the profile's headline
/// class token; anchors with empty text or no href are skipped. The
/// next page is announced by a `<link rel="next">` in the head; its
/// absence means the chain has terminated. Pure function so the parsed
/// DOM never has to live across an await point.
pub fn parse_results_page(
    html: &str,
    city: &Geography,
    profile: &SiteProfile,
) -> Result<ResultsPage> {
    let document = Html::parse_document(html);

    let headline_sel = compile(&format!("a.{}", profile.listing_link_class))?;
    let next_sel = compile(r#"link[rel~="next"]"#)?;

    let mut listings = Vec::new();
    for anchor in document.select(&headline_sel) {
        let title = anchor.text().collect::<String>();
        let title = title.trim();
        if title.is_empty() {
            continue;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        listings.push(ListingRef {
            title: title.to_string(),
            url: urls::to_absolute(&profile.domain, city, href),
        });
    }

    let next = document
        .select(&next_sel)
        .filter_map(|link| link.value().attr("href"))
        .next()
        .map(String::from);

    Ok(ResultsPage { listings, next })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boston() -> Geography {
        urls::city_from_url("craigslist.org", "http://boston.craigslist.org/")
            .unwrap()
            .unwrap()
    }

    #[test]
    fn collects_listings_in_dom_order() {
        let html = r#"
            <html><body>
            <a class="hdrlnk" href="/d/bike/123.html">Road bike</a>
            <a class="nav" href="/help">help</a>
            <a class="hdrlnk" href="//images.example/456.html">Frame only</a>
            <a class="hdrlnk" href="http://nyc.craigslist.org/d/789.html">Tandem</a>
            </body></html>
        "#;

        let page = parse_results_page(html, &boston(), &SiteProfile::default()).unwrap();
        assert_eq!(
            page.listings,
            vec![
                ListingRef {
                    title: "Road bike".to_string(),
                    url: "http://boston.craigslist.org/d/bike/123.html".to_string(),
                },
                ListingRef {
                    title: "Frame only".to_string(),
                    url: "http://images.example/456.html".to_string(),
                },
                ListingRef {
                    title: "Tandem".to_string(),
                    url: "http://nyc.craigslist.org/d/789.html".to_string(),
                },
            ]
        );
        assert!(page.next.is_none());
    }

    #[test]
    fn empty_page_yields_no_listings() {
        let html = "<html><body><p>Nothing matched your search.</p></body></html>";
        let page = parse_results_page(html, &boston(), &SiteProfile::default()).unwrap();
        assert!(page.listings.is_empty());
        assert!(page.next.is_none());
    }

    #[test]
    fn anchors_without_text_are_skipped() {
        let html = r#"
            <a class="hdrlnk" href="/d/1.html"></a>
            <a class="hdrlnk" href="/d/2.html">Kept</a>
        "#;

        let page = parse_results_page(html, &boston(), &SiteProfile::default()).unwrap();
        assert_eq!(page.listings.len(), 1);
        assert_eq!(page.listings[0].title, "Kept");
    }

    #[test]
    fn detects_next_link() {
        let html = r#"
            <html><head>
            <link rel="stylesheet" href="/styles.css">
            <link rel="next" href="http://boston.craigslist.org/search/sss?s=120">
            </head><body></body></html>
        "#;

        let page = parse_results_page(html, &boston(), &SiteProfile::default()).unwrap();
        assert_eq!(
            page.next.as_deref(),
            Some("http://boston.craigslist.org/search/sss?s=120")
        );
    }

    #[test]
    fn headline_class_matches_as_token() {
        // Multi-valued class attributes still match on the single token.
        let html = r#"<a class="result-title hdrlnk" href="/d/9.html">Multi</a>"#;
        let page = parse_results_page(html, &boston(), &SiteProfile::default()).unwrap();
        assert_eq!(page.listings.len(), 1);
    }
}
