//! HTTP fetcher implementation
//!
//! This module handles the HTTP side of an audit:
//! - Building an HTTP client with the configured user agent and timeout
//! - Issuing one GET per analyzed URL
//! - Classifying transport failures and non-success statuses

use crate::config::FetchConfig;
use crate::SeoLensError;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Raw result of fetching a single page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Response body decoded as UTF-8 (lossy)
    pub body: String,

    /// Byte length of the raw response body
    pub page_size: usize,

    /// HTTP status code
    pub status_code: u16,

    /// Elapsed time for the request including body download
    pub load_time: Duration,
}

/// Builds the HTTP client shared across the whole batch
///
/// The client carries the configured User-Agent and a total per-request
/// timeout. Redirects follow the library default policy; compressed
/// responses are transparently decoded.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL with a GET request
///
/// The elapsed time is measured around the full exchange, from sending the
/// request to draining the body. Non-2xx statuses are failures; the caller
/// converts them (like any other error here) into the error variant of the
/// analysis result.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - Body, size, status, and elapsed time
/// * `Err(SeoLensError)` - Timeout, transport failure, or non-2xx status
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, SeoLensError> {
    let start = Instant::now();

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_send_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SeoLensError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| classify_send_error(url, e))?;

    let load_time = start.elapsed();
    let page_size = bytes.len();
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(FetchedPage {
        body,
        page_size,
        status_code: status.as_u16(),
        load_time,
    })
}

/// Maps a reqwest error to the crate error type, keeping timeouts distinct
fn classify_send_error(url: &str, e: reqwest::Error) -> SeoLensError {
    if e.is_timeout() {
        SeoLensError::Timeout {
            url: url.to_string(),
        }
    } else {
        SeoLensError::Http {
            url: url.to_string(),
            source: e,
        }
    }
}
