use crate::error::{Result, ScrapeError};
use crate::models::Geography;

/// Extract the geography token from a marketplace URL's subdomain.
///
/// Accepts `[scheme:][//][label.]<domain>[/path]`. Returns `Ok(None)`
/// for a bare-domain URL (no subdomain), which callers treat as "skip
/// this entry". Fails when the URL is too short to be one at all or its
/// authority does not end in the site domain.
pub fn city_from_url(domain: &str, url: &str) -> Result<Option<Geography>> {
    if url.len() < 8 {
        return Err(ScrapeError::InvalidUrl { url: url.to_string() });
    }

    let rest = url
        .strip_prefix("https:")
        .or_else(|| url.strip_prefix("http:"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let authority = rest.split('/').next().unwrap_or("");

    if authority == domain {
        return Ok(None);
    }

    let label = authority
        .strip_suffix(domain)
        .and_then(|s| s.strip_suffix('.'))
        .ok_or_else(|| ScrapeError::InvalidUrl { url: url.to_string() })?;

    // Exactly one subdomain label; a dotted label means a deeper
    // nesting than this site family uses.
    if label.is_empty() || label.contains('.') {
        return Err(ScrapeError::InvalidUrl { url: url.to_string() });
    }

    Ok(Some(Geography::new(label)))
}

/// Rewrite an href from a results page into an absolute URL.
///
/// Priority order matters: a scheme-relative link must never be treated
/// as a path, so `//` is checked before `http`.
pub fn to_absolute(domain: &str, city: &Geography, href: &str) -> String {
    if href.starts_with("//") {
        format!("http:{href}")
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        format!("http://{city}.{domain}{href}")
    }
}
