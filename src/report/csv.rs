//! CSV report writer
//!
//! Writes one row per successful analysis with a fixed 14-column schema.
//! Error results produce no row. Fields containing the delimiter, quotes,
//! or newlines are quoted per RFC 4180.

use crate::analyzer::{AnalysisResult, PageAudit};
use crate::report::console::truncate_chars;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The fixed CSV header row
pub const CSV_HEADER: &str = "url,title,meta_description,meta_keywords,h1_count,h2_count,\
img_without_alt,internal_links,external_links,page_size,load_time,status_code,\
canonical_url,has_schema_markup";

/// Writes the batch results to a CSV file
///
/// # Arguments
///
/// * `results` - The accumulated results; error variants are skipped
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - File written (header plus one row per success)
/// * `Err(std::io::Error)` - Failed to create or write the file
pub fn write_csv(results: &[AnalysisResult], path: &Path) -> std::io::Result<()> {
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for result in results {
        if let AnalysisResult::Success(audit) = result {
            csv.push_str(&format_row(audit));
            csv.push('\n');
        }
    }

    let mut file = File::create(path)?;
    file.write_all(csv.as_bytes())?;

    Ok(())
}

/// Formats one success result as a CSV row
fn format_row(audit: &PageAudit) -> String {
    let fields = [
        escape_field(&audit.url),
        escape_field(&truncate_chars(&audit.title, 100)),
        escape_field(&truncate_chars(&audit.meta_description, 200)),
        escape_field(&truncate_chars(&audit.meta_keywords, 100)),
        audit.h1_tags.len().to_string(),
        audit.h2_tags.len().to_string(),
        audit.img_without_alt.to_string(),
        audit.internal_links.to_string(),
        audit.external_links.to_string(),
        audit.page_size.to_string(),
        audit.load_time.as_secs_f64().to_string(),
        audit.status_code.to_string(),
        escape_field(&audit.canonical_url),
        audit.has_schema_markup.to_string(),
    ];

    fields.join(",")
}

/// Quotes a field when it contains the delimiter, a quote, or a newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::NO_CANONICAL_URL;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn sample_audit() -> PageAudit {
        PageAudit {
            url: "https://example.com/".to_string(),
            title: "Home".to_string(),
            meta_description: "Welcome, friend".to_string(),
            meta_keywords: "seo audit".to_string(),
            h1_tags: vec!["First".to_string(), "Second".to_string()],
            h2_tags: vec!["Sub".to_string()],
            img_without_alt: 3,
            internal_links: 4,
            external_links: 2,
            page_size: 2048,
            load_time: Duration::from_millis(250),
            status_code: 200,
            canonical_url: NO_CANONICAL_URL.to_string(),
            og_tags: BTreeMap::new(),
            has_schema_markup: true,
        }
    }

    #[test]
    fn test_header_has_fourteen_columns() {
        assert_eq!(CSV_HEADER.split(',').count(), 14);
    }

    #[test]
    fn test_row_has_fourteen_fields() {
        let row = format_row(&sample_audit());
        // The description contains a comma, so count via a parse-aware check:
        // the quoted field collapses to one logical field
        assert!(row.contains("\"Welcome, friend\""));
        let unquoted = row.replace("\"Welcome, friend\"", "desc");
        assert_eq!(unquoted.split(',').count(), 14);
    }

    #[test]
    fn test_row_values() {
        let row = format_row(&sample_audit());
        assert!(row.starts_with("https://example.com/,Home,"));
        assert!(row.contains(",2,1,3,4,2,2048,0.25,200,"));
        assert!(row.ends_with(",true"));
    }

    #[test]
    fn test_escape_plain_field_unchanged() {
        assert_eq!(escape_field("plain"), "plain");
    }

    #[test]
    fn test_escape_field_with_comma() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_escape_field_with_quotes_doubles_them() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_escape_field_with_newline() {
        assert_eq!(escape_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_title_truncated_to_100_chars() {
        let mut audit = sample_audit();
        audit.title = "t".repeat(300);
        let row = format_row(&audit);
        assert!(row.contains(&"t".repeat(100)));
        assert!(!row.contains(&"t".repeat(101)));
    }

    #[test]
    fn test_description_truncated_to_200_chars() {
        let mut audit = sample_audit();
        audit.meta_description = "d".repeat(300);
        let row = format_row(&audit);
        assert!(row.contains(&"d".repeat(200)));
        assert!(!row.contains(&"d".repeat(201)));
    }

    #[test]
    fn test_errors_produce_no_row() {
        let results = vec![
            AnalysisResult::Success(sample_audit()),
            AnalysisResult::Error {
                url: "https://down.example/".to_string(),
                error: "Request timeout".to_string(),
            },
        ];

        let file = tempfile::NamedTempFile::new().unwrap();
        write_csv(&results, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2); // header + one success row
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("https://example.com/"));
        assert!(!content.contains("down.example"));
    }

    #[test]
    fn test_empty_batch_writes_header_only() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_csv(&[], file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.trim_end(), CSV_HEADER);
    }
}
