//! Console report rendering
//!
//! Prints one human-readable block per analyzed URL: the extracted fields
//! for successes, the failure message for errors.

use crate::analyzer::AnalysisResult;

/// Prints the batch results to stdout
///
/// # Arguments
///
/// * `results` - The accumulated results, in analysis order
pub fn print_report(results: &[AnalysisResult]) {
    for result in results {
        match result {
            AnalysisResult::Success(audit) => {
                println!("\n=== {} ===", audit.url);
                println!("Title: {}", audit.title);
                println!(
                    "Meta Description: {}...",
                    truncate_chars(&audit.meta_description, 100)
                );
                println!("H1 Tags: {}", audit.h1_tags.len());
                println!("H2 Tags: {}", audit.h2_tags.len());
                println!("Images without alt text: {}", audit.img_without_alt);
                println!("Internal Links: {}", audit.internal_links);
                println!("External Links: {}", audit.external_links);
                println!("Load Time: {:.2}s", audit.load_time.as_secs_f64());
                println!("Page Size: {} bytes", format_with_separators(audit.page_size));
                println!(
                    "Schema Markup: {}",
                    if audit.has_schema_markup { "Yes" } else { "No" }
                );
            }
            AnalysisResult::Error { url, error } => {
                println!("\nError for {}: {}", url, error);
            }
        }
    }
}

/// Truncates a string to at most `max` characters
///
/// Truncation is character-based, never splitting a UTF-8 code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Formats an integer with comma thousands separators
pub fn format_with_separators(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
