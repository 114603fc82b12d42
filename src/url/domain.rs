use url::Url;

/// Extracts the host from a URL string, lowercased
///
/// Link classification compares anchor hrefs against the host of the page
/// being analyzed, so this is computed once per page.
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
///
/// # Returns
///
/// * `Some(String)` - The lowercase host
/// * `None` - If the URL does not parse or has no host
///
/// # Examples
///
/// ```
/// use seolens::url::extract_host;
///
/// assert_eq!(
///     extract_host("https://Example.COM/path"),
///     Some("example.com".to_string())
/// );
/// assert_eq!(extract_host("not a url"), None);
/// ```
pub fn extract_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(|h| h.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_host() {
        assert_eq!(
            extract_host("https://example.com/"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_extract_subdomain() {
        assert_eq!(
            extract_host("https://blog.example.com/post"),
            Some("blog.example.com".to_string())
        );
    }

    #[test]
    fn test_extract_with_port() {
        // Ports are not part of the host
        assert_eq!(
            extract_host("http://example.com:8080/"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_extract_lowercases() {
        assert_eq!(
            extract_host("https://EXAMPLE.COM/"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_extract_with_path_and_query() {
        assert_eq!(
            extract_host("https://example.com/path?query=value"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_invalid_url_yields_none() {
        assert_eq!(extract_host("not a url"), None);
    }
}
