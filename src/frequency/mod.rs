//! Word-frequency aggregation
//!
//! The frequency table is created empty, updated once per counted token
//! across all documents, and ranked when aggregation completes.

mod table;

pub use table::{FrequencyTable, RankedList};
