//! Analyzer module: fetch, parse, extract
//!
//! This module contains the audit pipeline, including:
//! - HTTP fetching with a shared client
//! - Per-field SEO extraction rules over the parsed document
//! - The sequential batch runner

mod extractor;
mod fetcher;
mod runner;

pub use extractor::{
    count_external_links, count_images_without_alt, count_internal_links, extract,
    extract_canonical_url, extract_headings, extract_og_tags, extract_title, has_schema_markup,
    PageAudit, NO_CANONICAL_URL, NO_META_DESCRIPTION, NO_META_KEYWORDS, NO_TITLE,
};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use runner::{analyze_batch, analyze_url, AnalysisResult};
