//! Known-word validation
//!
//! A [`WordValidator`] answers whether a token is a real word. The harvester
//! only consults one when dictionaries are configured; by default every token
//! that survives the stop-word and name filters is counted.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading word lists
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Word list {} contains no words", .0.display())]
    Empty(PathBuf),
}

/// Decides whether a token is a known word
pub trait WordValidator {
    /// Returns true if `word` (already lowercase) is known
    fn is_known_word(&self, word: &str) -> bool;
}

/// A dictionary backed by one or more plain word lists
///
/// A word is known when any of the loaded lists contains it, so regional
/// spellings (e.g. `colour` and `color`) are both accepted when both lists are
/// loaded.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    lists: Vec<HashSet<String>>,
}

impl WordListDictionary {
    /// Creates a dictionary with no lists (knows no words)
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every list at `paths`
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        for path in paths {
            dictionary.load_list(path.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Reads one word per line from `path`, ignoring blank lines and `#` comments
    pub fn load_list(&mut self, path: &Path) -> Result<(), DictionaryError> {
        let content = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let words = parse_word_list(&content);
        if words.is_empty() {
            return Err(DictionaryError::Empty(path.to_path_buf()));
        }

        tracing::debug!("Loaded {} words from {}", words.len(), path.display());
        self.lists.push(words);
        Ok(())
    }

    /// Adds an in-memory list
    pub fn add_list<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lists
            .push(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect());
    }

    /// Number of loaded lists
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }
}

impl WordValidator for WordListDictionary {
    fn is_known_word(&self, word: &str) -> bool {
        self.lists.iter().any(|list| list.contains(word))
    }
}

fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
