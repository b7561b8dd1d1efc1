//! Word extraction and filtering
//!
//! Text is lowercased and split into maximal runs of ASCII letters bounded by
//! word boundaries. Letters glued to digits, underscores or non-ASCII letters
//! do not form a token (`abc123`, `snake_case` and `café` yield nothing).
//!
//! Filters run in a fixed order:
//! 1. tokens of two letters or fewer
//! 2. stop words
//! 3. names, when name exclusion is enabled
//! 4. tokens shorter than the configured minimum length
//! 5. unknown words, when a [`WordValidator`] is attached

use crate::config::FilterConfig;
use crate::text::dictionary::{WordListDictionary, WordValidator};
use crate::text::wordlists::{COMMON_NAMES, STOP_WORDS};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

const WORD_PATTERN: &str = r"\b[a-z]+\b";

/// Tokens of this length or shorter are never counted
const MAX_DISCARDED_LENGTH: usize = 2;

/// Splits text into countable words
pub struct Tokenizer {
    word_pattern: Regex,
    stop_words: HashSet<String>,
    names: HashSet<String>,
    exclude_names: bool,
    min_word_length: usize,
    validator: Option<Box<dyn WordValidator + Send + Sync>>,
}

impl Tokenizer {
    /// Creates a tokenizer with the built-in stop-word and name lists,
    /// minimum length 3 and name exclusion enabled
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_lists(STOP_WORDS.iter().copied(), COMMON_NAMES.iter().copied())
    }

    /// Creates a tokenizer with custom stop-word and name lists
    ///
    /// Entries are lowercased.
    pub fn with_lists<I, J, S, T>(stop_words: I, names: J) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(Self {
            word_pattern: Regex::new(WORD_PATTERN)?,
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            names: names.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            exclude_names: true,
            min_word_length: 3,
            validator: None,
        })
    }

    /// Builds a tokenizer from the filter section of the configuration
    ///
    /// Extra stop words and names extend the built-in lists. Configured
    /// dictionaries are loaded and attached as the known-word filter.
    pub fn from_config(config: &FilterConfig) -> crate::Result<Self> {
        let stop_words = STOP_WORDS
            .iter()
            .copied()
            .chain(config.extra_stop_words.iter().map(String::as_str));
        let names = COMMON_NAMES
            .iter()
            .copied()
            .chain(config.extra_names.iter().map(String::as_str));

        let mut tokenizer = Self::with_lists(stop_words, names)?
            .with_min_word_length(config.min_word_length)
            .with_exclude_names(config.exclude_names);

        if !config.dictionaries.is_empty() {
            let dictionary = WordListDictionary::from_paths(config.dictionaries.as_slice())?;
            tracing::info!(
                "Known-word filter enabled with {} dictionaries",
                dictionary.list_count()
            );
            tokenizer = tokenizer.with_validator(Box::new(dictionary));
        }

        Ok(tokenizer)
    }

    /// Sets the minimum token length
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Enables or disables name exclusion
    pub fn with_exclude_names(mut self, exclude_names: bool) -> Self {
        self.exclude_names = exclude_names;
        self
    }

    /// Attaches a known-word validator as the last filter stage
    pub fn with_validator(mut self, validator: Box<dyn WordValidator + Send + Sync>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Extracts the countable words of `text`, in order of occurrence
    ///
    /// # Example
    ///
    /// ```
    /// use gutenberg_freq::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new().unwrap();
    /// assert_eq!(tokenizer.tokenize("The Whale, the WHALE!"), vec!["whale", "whale"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| self.is_counted(token))
            .map(str::to_string)
            .collect()
    }

    /// Returns true if a lowercase token passes every filter stage
    pub fn is_counted(&self, token: &str) -> bool {
        if token.len() <= MAX_DISCARDED_LENGTH {
            return false;
        }
        if self.stop_words.contains(token) {
            return false;
        }
        if self.exclude_names && self.names.contains(token) {
            return false;
        }
        if token.len() < self.min_word_length {
            return false;
        }
        match &self.validator {
            Some(validator) => validator.is_known_word(token),
            None => true,
        }
    }

    /// Shortest token length that is counted
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Whether common names and titles are dropped
    pub fn excludes_names(&self) -> bool {
        self.exclude_names
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("stop_words", &self.stop_words.len())
            .field("names", &self.names.len())
            .field("exclude_names", &self.exclude_names)
            .field("min_word_length", &self.min_word_length)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}
