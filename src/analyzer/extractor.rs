//! SEO field extraction rules
//!
//! Each rule is an independent, side-effect-free function over a parsed
//! document. Every rule is total: where the document lacks the element, the
//! rule returns a documented sentinel string, an empty collection, or zero,
//! never an absent value.

use crate::url::extract_host;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::time::Duration;

/// Sentinel returned when the document has no `<title>` element
pub const NO_TITLE: &str = "No title found";

/// Sentinel returned when the document has no description meta element
pub const NO_META_DESCRIPTION: &str = "No meta description";

/// Sentinel returned when the document has no keywords meta element
pub const NO_META_KEYWORDS: &str = "No meta keywords";

/// Sentinel returned when the document has no canonical link element
pub const NO_CANONICAL_URL: &str = "No canonical URL";

/// All SEO signals extracted from a single successfully fetched page
///
/// String fields are never empty-by-absence: a missing element yields its
/// sentinel, while an element that exists but carries no text or attribute
/// value yields the empty string.
#[derive(Debug, Clone)]
pub struct PageAudit {
    /// The URL that was requested
    pub url: String,

    /// Text of the first `<title>` element
    pub title: String,

    /// Content of `<meta name="description">`
    pub meta_description: String,

    /// Content of `<meta name="keywords">`
    pub meta_keywords: String,

    /// Trimmed text of every `<h1>`, in document order
    pub h1_tags: Vec<String>,

    /// Trimmed text of the first five `<h2>` elements
    pub h2_tags: Vec<String>,

    /// Number of `<img>` elements with a missing or empty alt attribute
    pub img_without_alt: usize,

    /// Anchors whose href starts with "/" or contains the page host
    pub internal_links: usize,

    /// Anchors whose href starts with "http" and does not contain the host
    pub external_links: usize,

    /// Byte length of the raw response body
    pub page_size: usize,

    /// Elapsed time for the request
    pub load_time: Duration,

    /// HTTP status code of the response
    pub status_code: u16,

    /// Href of `<link rel="canonical">`
    pub canonical_url: String,

    /// Open-Graph properties (`og:*`) mapped to their content
    pub og_tags: BTreeMap<String, String>,

    /// Whether at least one JSON-LD script element is present
    pub has_schema_markup: bool,
}

/// Runs every extraction rule over a parsed document
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `url` - The originating URL, used for link classification
/// * `page_size` - Byte length of the fetched body
/// * `load_time` - Elapsed time of the fetch
/// * `status_code` - HTTP status of the response
pub fn extract(
    document: &Html,
    url: &str,
    page_size: usize,
    load_time: Duration,
    status_code: u16,
) -> PageAudit {
    let host = extract_host(url).unwrap_or_default();

    PageAudit {
        url: url.to_string(),
        title: extract_title(document),
        meta_description: extract_meta_content(document, "description")
            .unwrap_or_else(|| NO_META_DESCRIPTION.to_string()),
        meta_keywords: extract_meta_content(document, "keywords")
            .unwrap_or_else(|| NO_META_KEYWORDS.to_string()),
        h1_tags: extract_headings(document, "h1", usize::MAX),
        h2_tags: extract_headings(document, "h2", 5),
        img_without_alt: count_images_without_alt(document),
        internal_links: count_internal_links(document, &host),
        external_links: count_external_links(document, &host),
        page_size,
        load_time,
        status_code,
        canonical_url: extract_canonical_url(document),
        og_tags: extract_og_tags(document),
        has_schema_markup: has_schema_markup(document),
    }
}

/// Extracts the page title from the first `<title>` element
///
/// An empty title element yields the empty string; only a missing element
/// yields the sentinel.
pub fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return NO_TITLE.to_string();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Extracts the trimmed content attribute of `<meta name="...">`
///
/// Returns None when no matching element exists. An element without a
/// content attribute yields Some("").
fn extract_meta_content(document: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!("meta[name=\"{}\"]", name)).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.value().attr("content").unwrap_or("").trim().to_string())
}

/// Collects trimmed heading text for the given tag, up to `limit` elements
pub fn extract_headings(document: &Html, tag: &str, limit: usize) -> Vec<String> {
    let Ok(selector) = Selector::parse(tag) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .take(limit)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

/// Counts `<img>` elements whose alt attribute is missing or empty
pub fn count_images_without_alt(document: &Html) -> usize {
    let Ok(selector) = Selector::parse("img") else {
        return 0;
    };

    document
        .select(&selector)
        .filter(|element| {
            element
                .value()
                .attr("alt")
                .map(|alt| alt.is_empty())
                .unwrap_or(true)
        })
        .count()
}

/// Counts anchors classified as internal links
///
/// An href is internal when it starts with "/" or contains the page host as
/// a substring. The substring test is the documented contract: the host
/// appearing inside an unrelated href still counts as internal.
pub fn count_internal_links(document: &Html, host: &str) -> usize {
    count_anchors_matching(document, |href| {
        href.starts_with('/') || href.contains(host)
    })
}

/// Counts anchors classified as external links
///
/// An href is external when it starts with "http" and does not contain the
/// page host. Hrefs matching neither rule (mailto:, fragments, bare relative
/// paths) fall into neither count.
pub fn count_external_links(document: &Html, host: &str) -> usize {
    count_anchors_matching(document, |href| {
        href.starts_with("http") && !href.contains(host)
    })
}

/// Counts anchors with an href matching the given predicate
fn count_anchors_matching(document: &Html, predicate: impl Fn(&str) -> bool) -> usize {
    let Ok(selector) = Selector::parse("a[href]") else {
        return 0;
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| predicate(href))
        .count()
}

/// Extracts the href of `<link rel="canonical">`
pub fn extract_canonical_url(document: &Html) -> String {
    let Ok(selector) = Selector::parse("link[rel=\"canonical\"]") else {
        return NO_CANONICAL_URL.to_string();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.value().attr("href").unwrap_or("").to_string())
        .unwrap_or_else(|| NO_CANONICAL_URL.to_string())
}

/// Collects Open-Graph meta elements into a property → content map
pub fn extract_og_tags(document: &Html) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();

    let Ok(selector) = Selector::parse("meta[property^=\"og:\"]") else {
        return tags;
    };

    for element in document.select(&selector) {
        if let Some(property) = element.value().attr("property") {
            let content = element.value().attr("content").unwrap_or("");
            tags.insert(property.to_string(), content.to_string());
        }
    }

    tags
}

/// Checks for the presence of at least one JSON-LD script element
pub fn has_schema_markup(document: &Html) -> bool {
    let Ok(selector) = Selector::parse("script[type=\"application/ld+json\"]") else {
        return false;
    };

    document.select(&selector).next().is_some()
}
