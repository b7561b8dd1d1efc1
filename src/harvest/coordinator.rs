//! Harvest coordinator - main orchestration logic
//!
//! This module drives each book through the pipeline, one at a time:
//! - Fetching the raw text (primary URL, then fallback)
//! - Stripping the license header and footer
//! - Tokenizing and filtering the body
//! - Adding the words to the shared frequency table
//!
//! A book that cannot be downloaded is logged and skipped; it never aborts the
//! run.

use crate::frequency::FrequencyTable;
use crate::harvest::{BookId, DocumentOutcome, DocumentSource};
use crate::output::HarvestSummary;
use crate::text::{strip_boilerplate, Tokenizer};

/// Final state of a harvest run
#[derive(Debug, Clone)]
pub struct HarvestReport {
    /// Aggregated word counts of every processed book
    pub table: FrequencyTable,

    /// Per-book outcomes and timing
    pub summary: HarvestSummary,
}

/// Main harvest coordinator structure
#[derive(Debug)]
pub struct Harvester<'a, S> {
    source: &'a S,
    tokenizer: &'a Tokenizer,
}

impl<'a, S: DocumentSource> Harvester<'a, S> {
    /// Creates a harvester reading from `source`
    pub fn new(source: &'a S, tokenizer: &'a Tokenizer) -> Self {
        Self { source, tokenizer }
    }

    /// Harvests every book in order into a fresh frequency table
    pub async fn run(&self, books: &[BookId]) -> HarvestReport {
        let mut table = FrequencyTable::new();
        let mut summary = HarvestSummary::new();

        for &id in books {
            let outcome = self.process_book(id, &mut table).await;
            tracing::debug!("Book {}: {}", id, outcome);
            summary.record(id, &outcome);
        }

        summary.finish();
        tracing::info!(
            "Harvest finished: {} of {} books processed",
            summary.processed.len(),
            summary.total_books()
        );

        HarvestReport { table, summary }
    }

    /// Downloads one book and adds its words to `table`
    ///
    /// The table is untouched when the download fails.
    pub async fn process_book(&self, id: BookId, table: &mut FrequencyTable) -> DocumentOutcome {
        tracing::info!("Processing book {}...", id);

        let raw = match self.source.fetch(id).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("{}", e);
                return DocumentOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let body = strip_boilerplate(&raw);
        tracing::debug!(
            "Book {}: kept {} of {} bytes after stripping",
            id,
            body.len(),
            raw.len()
        );

        let words = table.update(self.tokenizer.tokenize(body));
        tracing::info!("  Added {} words from book {}", words, id);

        DocumentOutcome::Processed { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttemptError, FetchError};
    use std::collections::HashMap;

    /// In-memory source; ids without a text fail on both attempts
    struct StubSource {
        texts: HashMap<BookId, String>,
    }

    impl StubSource {
        fn new(texts: &[(BookId, &str)]) -> Self {
            Self {
                texts: texts
                    .iter()
                    .map(|(id, text)| (*id, text.to_string()))
                    .collect(),
            }
        }
    }

    impl DocumentSource for StubSource {
        async fn fetch(&self, id: BookId) -> Result<String, FetchError> {
            self.texts.get(&id).cloned().ok_or_else(|| FetchError::Exhausted {
                id,
                primary: AttemptError::Status {
                    url: format!("stub://files/{id}"),
                    status: 404,
                },
                fallback: AttemptError::Status {
                    url: format!("stub://cache/{id}"),
                    status: 404,
                },
            })
        }
    }

    fn tokenizer() -> Tokenizer {
        Tokenizer::new().unwrap()
    }

    #[tokio::test]
    async fn test_failed_book_is_skipped() {
        let source = StubSource::new(&[(1, "whale ocean"), (3, "harpoon")]);
        let tokenizer = tokenizer();
        let harvester = Harvester::new(&source, &tokenizer);

        let report = harvester.run(&[1, 2, 3]).await;

        assert_eq!(report.table.get("whale"), Some(1));
        assert_eq!(report.table.get("harpoon"), Some(1));
        assert_eq!(report.table.total_occurrences(), 3);
        assert_eq!(report.summary.processed, vec![(1, 2), (3, 1)]);
        assert_eq!(report.summary.failed.len(), 1);
        assert_eq!(report.summary.failed[0].0, 2);
        assert!(report.summary.finished_at.is_some());
    }

    #[tokio::test]
    async fn test_boilerplate_is_not_counted() {
        let text = "Project Gutenberg license preamble\n\
                    *** START OF THE PROJECT GUTENBERG EBOOK TEST ***\n\
                    Whales swim\n\
                    *** END OF THE PROJECT GUTENBERG EBOOK TEST ***\n\
                    license trailer";
        let source = StubSource::new(&[(7, text)]);
        let tokenizer = tokenizer();
        let harvester = Harvester::new(&source, &tokenizer);

        let report = harvester.run(&[7]).await;

        assert_eq!(
            report.table.rank(),
            vec![("swim".to_string(), 1), ("whales".to_string(), 1)]
        );
        assert_eq!(report.table.get("license"), None);
        assert_eq!(report.table.get("project"), None);
    }

    #[tokio::test]
    async fn test_book_order_does_not_change_table() {
        let source = StubSource::new(&[(1, "sea sea ship"), (2, "ship storm")]);
        let tokenizer = tokenizer();
        let harvester = Harvester::new(&source, &tokenizer);

        let forward = harvester.run(&[1, 2]).await;
        let backward = harvester.run(&[2, 1]).await;

        assert_eq!(forward.table, backward.table);
    }

    #[tokio::test]
    async fn test_empty_book_adds_nothing() {
        let source = StubSource::new(&[(5, "")]);
        let tokenizer = tokenizer();
        let harvester = Harvester::new(&source, &tokenizer);
        let mut table = FrequencyTable::new();

        let outcome = harvester.process_book(5, &mut table).await;

        assert_eq!(outcome, DocumentOutcome::Processed { words: 0 });
        assert!(table.is_empty());
    }
}
