//! Per-run harvest summary
//!
//! Records which books were counted, which were skipped and why, and when the
//! run started and finished.

use crate::harvest::{BookId, DocumentOutcome};
use chrono::{DateTime, Utc};

/// Summary statistics for a harvest run
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    // Run metadata
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    // Books that contributed, with the number of words each added
    pub processed: Vec<(BookId, u64)>,

    // Books that were skipped, with the failure description
    pub failed: Vec<(BookId, String)>,
}

impl Default for HarvestSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl HarvestSummary {
    /// Creates an empty summary starting now
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            processed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Records the outcome of one book
    pub fn record(&mut self, id: BookId, outcome: &DocumentOutcome) {
        match outcome {
            DocumentOutcome::Processed { words } => self.processed.push((id, *words)),
            DocumentOutcome::Failed { reason } => self.failed.push((id, reason.clone())),
        }
    }

    /// Marks the run as finished now
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of books attempted
    pub fn total_books(&self) -> usize {
        self.processed.len() + self.failed.len()
    }

    /// Total words added across all processed books
    pub fn words_added(&self) -> u64 {
        self.processed.iter().map(|(_, words)| words).sum()
    }

    /// Wall-clock duration, once the run has finished
    pub fn duration_seconds(&self) -> Option<u64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds().max(0) as u64)
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.total_books();
        if total == 0 {
            return 0.0;
        }
        (self.processed.len() as f64 / total as f64) * 100.0
    }
}
