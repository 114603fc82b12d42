//! Configuration module for SeoLens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use seolens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("First URL: {}", config.urls[0]);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BatchConfig, Config, FetchConfig, OutputConfig};

// Re-export parser functions
pub use parser::load_config;
