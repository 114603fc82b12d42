//! Report module for rendering batch results
//!
//! This module handles:
//! - Printing the human-readable console summary
//! - Writing the fixed-schema CSV report

mod console;
mod csv;

pub use console::{format_with_separators, print_report, truncate_chars};
pub use csv::{write_csv, CSV_HEADER};
