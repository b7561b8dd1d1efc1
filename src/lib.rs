//! Gutenberg-Freq: A word-frequency harvester for public-domain texts
//!
//! This crate downloads Project Gutenberg books, strips the license framing
//! around each text, tokenizes the body into lowercase words and aggregates a
//! global word-frequency table that is written out as tab-separated files.

pub mod config;
pub mod frequency;
pub mod harvest;
pub mod output;
pub mod text;

use thiserror::Error;

/// Main error type for Gutenberg-Freq operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] text::DictionaryError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Tokenizer pattern error: {0}")]
    Pattern(#[from] regex::Error),
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

/// Failure of a single HTTP attempt
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },
}

/// A document that could not be retrieved from any of its URLs
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to download book {id}: {fallback} (primary: {primary})")]
    Exhausted {
        id: harvest::BookId,
        primary: AttemptError,
        fallback: AttemptError,
    },
}

impl FetchError {
    /// Returns the book the failure belongs to
    pub fn book_id(&self) -> harvest::BookId {
        match self {
            Self::Exhausted { id, .. } => *id,
        }
    }
}

/// Result type alias for Gutenberg-Freq operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use frequency::{FrequencyTable, RankedList};
pub use harvest::{
    build_word_frequency, harvest, BookId, DocumentSource, GutenbergClient, HarvestReport, Harvester,
};
pub use text::{strip_boilerplate, Tokenizer};
