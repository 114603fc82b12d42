//! URL helpers
//!
//! Host extraction used by the link-classification rules.

mod domain;

pub use domain::extract_host;
