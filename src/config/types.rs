use serde::Deserialize;

/// Main configuration structure for SeoLens
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URLs to analyze, in the order they should be processed
    pub urls: Vec<String>,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Batch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Pause between consecutive requests (milliseconds)
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV report file
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_csv_path() -> String {
    "seo_analysis.csv".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            csv_path: default_csv_path(),
        }
    }
}
