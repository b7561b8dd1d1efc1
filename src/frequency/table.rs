use std::collections::HashMap;

/// Words paired with their counts, most frequent first
pub type RankedList = Vec<(String, u64)>;

/// Running word counts across every processed document
///
/// Counts only grow. Because updates are plain additions, the final table is
/// the same whatever order documents are processed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of every token
    ///
    /// # Returns
    ///
    /// The number of tokens counted
    pub fn update<I, S>(&mut self, tokens: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for token in tokens {
            *self.counts.entry(token.into()).or_insert(0) += 1;
            added += 1;
        }
        added
    }

    /// Adds every count of `other` into this table
    pub fn merge(&mut self, other: FrequencyTable) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    /// Returns the count of `word`, if it was ever seen
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Ranks every entry by count, highest first
    ///
    /// Equal counts are ordered alphabetically so the ranking is the same on
    /// every call and every run.
    pub fn rank(&self) -> RankedList {
        let mut ranked: RankedList = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Returns the first `n` entries of the ranking
    pub fn most_common(&self, n: usize) -> RankedList {
        let mut ranked = self.rank();
        ranked.truncate(n);
        ranked
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        table.update(iter);
        table
    }
}
