//! Output module for persisting and reporting harvest results
//!
//! This module handles:
//! - Writing ranked word frequencies as tab-separated files
//! - Recording per-run statistics
//! - Printing the console summary

mod stats;
mod summary;
mod writer;

pub use stats::{format_summary, print_summary};
pub use summary::HarvestSummary;
pub use writer::{save_frequency_file, write_frequencies};

use crate::config::OutputConfig;
use crate::frequency::RankedList;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Number of entries written to each output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenFiles {
    pub full: usize,
    pub top: usize,
}

/// Writes the full ranking and the top-N ranking to their configured paths
///
/// # Arguments
///
/// * `ranked` - Every entry in ranked order
/// * `config` - Output paths and the top-N size
///
/// # Returns
///
/// * `Ok(WrittenFiles)` - Entry counts of both files
/// * `Err(OutputError)` - Either file could not be written
pub fn save_outputs(ranked: &RankedList, config: &OutputConfig) -> OutputResult<WrittenFiles> {
    let full = save_frequency_file(ranked, Path::new(&config.full_path), None)?;
    let top = save_frequency_file(ranked, Path::new(&config.top_path), Some(config.top_n))?;
    Ok(WrittenFiles { full, top })
}
