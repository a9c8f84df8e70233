use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

use crate::error::{Result, ScrapeError};
use crate::models::{ListingDetails, Price};
use crate::scrapers::types::{compile, SiteProfile};

/// Parse a listing detail page into its price, attributes and
/// description.
///
/// An omitted price is a normal listing state and maps to
/// `Price::Missing`. A page without the key-value attribute group is a
/// different matter entirely: the listing was likely deleted or
/// expired, and the caller must be able to tell that apart from a
/// sparse but valid listing, so it is a hard `MalformedListing` error.
pub fn parse_listing_page(html: &str, url: &str, profile: &SiteProfile) -> Result<ListingDetails> {
    let document = Html::parse_document(html);

    let price_sel = compile(&format!("span.{}", profile.price_class))?;
    let group_sel = compile(&format!("p.{}", profile.attr_group_class))?;
    let span_sel = compile("span")?;
    let meta_sel = compile(r#"meta[name="description"]"#)?;

    let price = document
        .select(&price_sel)
        .next()
        .and_then(|span| span.text().next())
        .map(|text| Price::Listed(text.trim().to_string()))
        .unwrap_or(Price::Missing);

    let groups: Vec<ElementRef> = document.select(&group_sel).collect();
    let group = groups
        .get(profile.attr_group_index)
        .ok_or_else(|| ScrapeError::MalformedListing { url: url.to_string() })?;

    let mut attributes = BTreeMap::new();
    for span in group.select(&span_sel) {
        if let Some((name, value)) = parse_attribute(span) {
            attributes.insert(name, value);
        }
    }

    let description = document
        .select(&meta_sel)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string();

    Ok(ListingDetails {
        url: url.to_string(),
        price,
        description,
        attributes,
    })
}

/// One attribute span renders as `name: <b>value</b>`: the name is the
/// span's leading text node and the value lives in the following
/// element child. An attribute listed without a value is dropped; a
/// dangling key is worse than a missing one.
fn parse_attribute(span: ElementRef) -> Option<(String, String)> {
    let mut children = span.children();

    let name = children
        .next()?
        .value()
        .as_text()
        .map(|t| t.trim().trim_end_matches(':').trim_end().to_string())?;
    if name.is_empty() {
        return None;
    }

    let value_node = children.next()?;
    let value = ElementRef::wrap(value_node)?.text().next()?.trim().to_string();
    if value.is_empty() {
        return None;
    }

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://boston.craigslist.org/d/bike/123.html";

    fn parse(html: &str) -> Result<ListingDetails> {
        parse_listing_page(html, URL, &SiteProfile::default())
    }

    fn listing_page(price_span: &str) -> String {
        format!(
            r#"
            <html><head>
            <meta name="description" content="Road bike in great shape">
            </head><body>
            {price_span}
            <p class="attrgroup"><span>2019 trek emonda</span></p>
            <p class="attrgroup">
                <span>condition: <b>excellent</b></span>
                <span>make: <b>trek</b></span>
                <span>size / dimensions: <b>56cm</b></span>
            </p>
            </body></html>
            "#
        )
    }

    #[test]
    fn extracts_price_attributes_and_description() {
        let html = listing_page(r#"<span class="price">$1,200</span>"#);
        let details = parse(&html).unwrap();

        assert_eq!(details.price, Price::Listed("$1,200".to_string()));
        assert_eq!(details.description, "Road bike in great shape");
        assert_eq!(details.attributes["condition"], "excellent");
        assert_eq!(details.attributes["make"], "trek");
        assert_eq!(details.attributes["size / dimensions"], "56cm");
    }

    #[test]
    fn missing_price_is_not_an_error() {
        let html = listing_page("");
        let details = parse(&html).unwrap();

        assert!(details.price.is_missing());
        assert_eq!(details.attributes["make"], "trek");
    }

    #[test]
    fn single_attribute_group_is_malformed() {
        let html = r#"
            <html><body>
            <p class="attrgroup"><span>just a title line</span></p>
            </body></html>
        "#;

        assert!(matches!(
            parse(html),
            Err(ScrapeError::MalformedListing { .. })
        ));
    }

    #[test]
    fn attribute_without_value_is_dropped() {
        let html = r#"
            <html><body>
            <p class="attrgroup"><span>meta</span></p>
            <p class="attrgroup">
                <span>condition: <b>good</b></span>
                <span>odometer:</span>
            </p>
            </body></html>
        "#;

        let details = parse(html).unwrap();
        assert_eq!(details.attributes.len(), 1);
        assert_eq!(details.attributes["condition"], "good");
    }

    #[test]
    fn missing_description_meta_yields_empty_string() {
        let html = r#"
            <html><body>
            <p class="attrgroup"><span>meta</span></p>
            <p class="attrgroup"><span>make: <b>trek</b></span></p>
            </body></html>
        "#;

        let details = parse(html).unwrap();
        assert_eq!(details.description, "");
    }

    #[test]
    fn reparsing_the_same_page_is_deterministic() {
        let html = listing_page(r#"<span class="price">$50</span>"#);
        assert_eq!(parse(&html).unwrap(), parse(&html).unwrap());
    }
}
