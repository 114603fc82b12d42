//! Sequential batch runner
//!
//! Walks the configured URL list in order, fetching and extracting one page
//! at a time with a fixed pause between requests. Per-URL failures become
//! error-variant results; the batch itself always completes.

use crate::analyzer::extractor::{extract, PageAudit};
use crate::analyzer::fetcher::fetch_page;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Outcome of analyzing one URL
#[derive(Debug, Clone)]
pub enum AnalysisResult {
    /// The page was fetched and all fields extracted
    Success(PageAudit),

    /// Fetching or parsing failed; the batch continued past it
    Error {
        /// The URL that failed
        url: String,
        /// Description of the underlying failure
        error: String,
    },
}

impl AnalysisResult {
    /// The URL this result refers to, regardless of variant
    pub fn url(&self) -> &str {
        match self {
            AnalysisResult::Success(audit) => &audit.url,
            AnalysisResult::Error { url, .. } => url,
        }
    }

    /// Returns the audit for success results
    pub fn audit(&self) -> Option<&PageAudit> {
        match self {
            AnalysisResult::Success(audit) => Some(audit),
            AnalysisResult::Error { .. } => None,
        }
    }
}

/// Analyzes a single URL: one GET, one parse, all extraction rules
///
/// Failures are converted to the error variant here, at the per-URL
/// boundary, so callers never see a raised error for an individual page.
pub async fn analyze_url(client: &Client, url: &str) -> AnalysisResult {
    match fetch_page(client, url).await {
        Ok(page) => {
            let document = Html::parse_document(&page.body);
            let audit = extract(
                &document,
                url,
                page.page_size,
                page.load_time,
                page.status_code,
            );
            AnalysisResult::Success(audit)
        }
        Err(e) => {
            tracing::warn!("Analysis failed for {}: {}", url, e);
            AnalysisResult::Error {
                url: url.to_string(),
                error: e.to_string(),
            }
        }
    }
}

/// Analyzes a list of URLs sequentially
///
/// Results come back in input order, one per URL, success or error. A fixed
/// delay separates consecutive requests; there is no delay after the last.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `urls` - URLs to analyze, in order
/// * `delay` - Pause between consecutive requests
pub async fn analyze_batch(client: &Client, urls: &[String], delay: Duration) -> Vec<AnalysisResult> {
    let mut results = Vec::with_capacity(urls.len());

    for (index, url) in urls.iter().enumerate() {
        tracing::info!("Analyzing: {}", url);
        let result = analyze_url(client, url).await;

        match &result {
            AnalysisResult::Success(audit) => {
                tracing::debug!(
                    "{}: status {}, {} bytes in {:.2}s",
                    url,
                    audit.status_code,
                    audit.page_size,
                    audit.load_time.as_secs_f64()
                );
            }
            AnalysisResult::Error { error, .. } => {
                tracing::debug!("{}: {}", url, error);
            }
        }

        results.push(result);

        if index + 1 < urls.len() {
            tokio::time::sleep(delay).await;
        }
    }

    results
}
