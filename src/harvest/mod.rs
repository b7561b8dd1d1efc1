//! Harvest module for downloading books and counting their words
//!
//! This module contains the core harvesting logic, including:
//! - The [`DocumentSource`] seam the pipeline downloads through
//! - HTTP fetching with a single fallback URL
//! - Per-book outcomes
//! - Overall harvest coordination

mod coordinator;
mod fetcher;
mod outcome;

pub use coordinator::{HarvestReport, Harvester};
pub use fetcher::{build_http_client, fetch_text, GutenbergClient};
pub use outcome::DocumentOutcome;

use crate::config::{validate, Config};
use crate::output::{save_outputs, WrittenFiles};
use crate::text::Tokenizer;
use crate::FetchError;

/// Project Gutenberg book number
pub type BookId = u32;

/// Something that can produce the raw text of a book
///
/// Implementations make at most a bounded number of attempts and report a
/// definitive [`FetchError`] when none succeed.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Returns the full text of book `id`
    async fn fetch(&self, id: BookId) -> Result<String, FetchError>;
}

/// Runs a complete harvest
///
/// This is the main entry point of the pipeline. Books are processed in the
/// given order; books that fail to download are skipped.
///
/// # Arguments
///
/// * `source` - Where book texts are downloaded from
/// * `books` - Book ids to process
/// * `tokenizer` - Word extraction and filtering policy
///
/// # Returns
///
/// The aggregated frequency table and the run summary
pub async fn build_word_frequency<S: DocumentSource>(
    source: &S,
    books: &[BookId],
    tokenizer: &Tokenizer,
) -> HarvestReport {
    Harvester::new(source, tokenizer).run(books).await
}

/// Runs a complete harvest from configuration and writes both output files
///
/// This will:
/// 1. Validate the configuration
/// 2. Build the HTTP client and tokenizer
/// 3. Download and count every configured book
/// 4. Rank the table and write the full and top-N files
///
/// # Returns
///
/// * `Ok((HarvestReport, WrittenFiles))` - Harvest finished and both files were written
/// * `Err(HarvestError)` - Setup failed or an output file could not be written
pub async fn harvest(config: &Config) -> crate::Result<(HarvestReport, WrittenFiles)> {
    validate(config)?;

    let client = GutenbergClient::new(&config.source)?;
    let tokenizer = Tokenizer::from_config(&config.filter)?;
    tracing::info!(
        "Counting words of {}+ letters ({})",
        tokenizer.min_word_length(),
        if tokenizer.excludes_names() {
            "names excluded"
        } else {
            "names kept"
        }
    );
    tracing::debug!("Using {:?}", tokenizer);

    let report = build_word_frequency(&client, &config.source.books, &tokenizer).await;

    let ranked = report.table.rank();
    let written = save_outputs(&ranked, &config.output)?;

    Ok((report, written))
}
