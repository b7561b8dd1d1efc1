//! Console summary of a harvest
//!
//! This module formats the end-of-run report: vocabulary totals, the most
//! common words, and which books were skipped.

use crate::frequency::FrequencyTable;
use crate::output::HarvestSummary;

/// Formats the end-of-run report
///
/// # Arguments
///
/// * `table` - The aggregated frequency table
/// * `summary` - The run summary
/// * `top` - Number of most common words to list
pub fn format_summary(table: &FrequencyTable, summary: &HarvestSummary, top: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nTotal unique words: {}\n", table.unique_words()));
    out.push_str(&format!("Total word occurrences: {}\n", table.total_occurrences()));

    out.push_str(&format!("\nTop {} most common words:\n", top));
    out.push_str(&format!("{}\n", "-".repeat(30)));
    for (word, count) in table.most_common(top) {
        out.push_str(&format!("{:20} {:>8}\n", word, count));
    }

    out.push_str(&format!(
        "\nBooks processed: {} / {} ({:.1}%)\n",
        summary.processed.len(),
        summary.total_books(),
        summary.success_rate()
    ));
    out.push_str(&format!("Words counted: {}\n", summary.words_added()));
    if !summary.failed.is_empty() {
        out.push_str(&format!("Skipped books ({}):\n", summary.failed.len()));
        for (id, reason) in &summary.failed {
            out.push_str(&format!("  - {}: {}\n", id, reason));
        }
    }
    if let Some(duration) = summary.duration_seconds() {
        out.push_str(&format!("Duration: {} seconds\n", duration));
    }

    out
}

/// Prints the end-of-run report to stdout
pub fn print_summary(table: &FrequencyTable, summary: &HarvestSummary, top: usize) {
    print!("{}", format_summary(table, summary, top));
}
