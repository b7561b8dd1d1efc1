//! Configuration module for Gutenberg-Freq
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, [`Config::default`] supplies the
//! built-in book list, filter policy and output paths.
//!
//! # Example
//!
//! ```no_run
//! use gutenberg_freq::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Minimum word length: {}", config.filter.min_word_length);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FilterConfig, OutputConfig, SourceConfig, DEFAULT_BASE_URL, DEFAULT_BOOKS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
