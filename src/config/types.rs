use serde::Deserialize;

use crate::harvest::BookId;

/// Project Gutenberg host used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://www.gutenberg.org";

/// Books harvested when no list is configured
pub const DEFAULT_BOOKS: &[BookId] = &[
    84,    // Frankenstein
    1342,  // Pride and Prejudice
    11,    // Alice's Adventures in Wonderland
    1661,  // The Adventures of Sherlock Holmes
    2701,  // Moby Dick
    36,    // The War of the Worlds
    98,    // A Tale of Two Cities
    2554,  // Crime and Punishment
    28553, // How it Works
    71693, // The Cambridge Natural History
    1228,  // On the Origin of Species
    30107, // Principles of Political Economy
    3300,  // The Wealth of Nations
    41360, // The Elementary Forms of the Religious Life
    2529,  // The Analysis of Mind
    4763,  // The Game of Logic
    50100, // How to Do Chemical Tricks
];

/// Main configuration structure for Gutenberg-Freq
///
/// Every section is optional in the TOML file; missing sections fall back to
/// the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how documents are downloaded
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Scheme and host the URL templates are built on
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Whole-request timeout per attempt (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Book ids to harvest, in processing order
    pub books: Vec<BookId>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: concat!("gutenberg-freq/", env!("CARGO_PKG_VERSION")).to_string(),
            books: DEFAULT_BOOKS.to_vec(),
        }
    }
}

/// Token filtering policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Tokens shorter than this are discarded
    #[serde(rename = "min-word-length")]
    pub min_word_length: usize,

    /// Whether common first names, surnames and titles are discarded
    #[serde(rename = "exclude-names")]
    pub exclude_names: bool,

    /// Words added to the built-in stop-word list
    #[serde(rename = "extra-stop-words")]
    pub extra_stop_words: Vec<String>,

    /// Words added to the built-in name list
    #[serde(rename = "extra-names")]
    pub extra_names: Vec<String>,

    /// Word-list files; when any are given, unknown words are discarded
    pub dictionaries: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            exclude_names: true,
            extra_stop_words: Vec::new(),
            extra_names: Vec::new(),
            dictionaries: Vec::new(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File receiving every ranked entry
    #[serde(rename = "full-path")]
    pub full_path: String,

    /// File receiving the first `top_n` ranked entries
    #[serde(rename = "top-path")]
    pub top_path: String,

    /// Number of entries written to `top_path`
    #[serde(rename = "top-n")]
    pub top_n: usize,

    /// Number of entries shown in the console summary
    #[serde(rename = "summary-top")]
    pub summary_top: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            full_path: "word_frequencies.txt".to_string(),
            top_path: "top_10000_words.txt".to_string(),
            top_n: 10_000,
            summary_top: 50,
        }
    }
}
