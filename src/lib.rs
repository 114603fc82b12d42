//! SeoLens: an ad-hoc SEO page auditor
//!
//! This crate fetches web pages, parses their markup once per page, extracts
//! a fixed set of SEO signals (title, meta tags, headings, link counts,
//! structured-data presence), and renders a batch of results to a console
//! summary and a CSV report.

pub mod analyzer;
pub mod config;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for SeoLens operations
#[derive(Debug, Error)]
pub enum SeoLensError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for SeoLens operations
pub type Result<T> = std::result::Result<T, SeoLensError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzer::{AnalysisResult, PageAudit};
pub use config::Config;
