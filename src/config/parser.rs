use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use seolens::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Will analyze {} URLs", config.urls.len());
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
urls = ["https://example.com", "https://example.org/page"]

[fetch]
user-agent = "TestAgent/1.0"
timeout-secs = 5

[batch]
delay-ms = 250

[output]
csv-path = "./audit.csv"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.urls.len(), 2);
        assert_eq!(config.fetch.user_agent, "TestAgent/1.0");
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.batch.delay_ms, 250);
        assert_eq!(config.output.csv_path, "./audit.csv");
    }

    #[test]
    fn test_load_config_defaults() {
        let config_content = r#"
urls = ["https://example.com"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.batch.delay_ms, 1000);
        assert_eq!(config.output.csv_path, "seo_analysis.csv");
        assert!(config.fetch.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
urls = []
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_with_bad_url() {
        let config_content = r#"
urls = ["://no-scheme"]
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidUrl(_)));
    }
}
