//! Frequency file writer
//!
//! Ranked entries are written one per line as `word<TAB>count`, UTF-8, with no
//! header or trailer.

use crate::output::{OutputError, OutputResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes ranked entries to `sink`, stopping after `limit` entries if given
///
/// # Returns
///
/// * `Ok(usize)` - Number of entries written
/// * `Err(io::Error)` - The sink failed
pub fn write_frequencies<W: Write>(
    ranked: &[(String, u64)],
    mut sink: W,
    limit: Option<usize>,
) -> io::Result<usize> {
    let count = limit.map_or(ranked.len(), |n| n.min(ranked.len()));

    for (word, occurrences) in &ranked[..count] {
        writeln!(sink, "{}\t{}", word, occurrences)?;
    }
    sink.flush()?;

    Ok(count)
}

/// Writes ranked entries to a file, replacing any existing content
///
/// # Arguments
///
/// * `ranked` - Entries in ranked order
/// * `path` - Destination file
/// * `limit` - Maximum number of entries to write
///
/// # Returns
///
/// * `Ok(usize)` - Number of entries written
/// * `Err(OutputError)` - Failed to create or write the file
pub fn save_frequency_file(
    ranked: &[(String, u64)],
    path: &Path,
    limit: Option<usize>,
) -> OutputResult<usize> {
    let write = || -> io::Result<usize> {
        let file = File::create(path)?;
        write_frequencies(ranked, BufWriter::new(file), limit)
    };

    let written = write().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved {} words to {}", written, path.display());
    Ok(written)
}
