//! Text normalization for downloaded books
//!
//! This module contains the text side of the pipeline:
//! - Stripping the Gutenberg license header and footer
//! - Tokenizing the body into lowercase words
//! - The built-in stop-word and name lists
//! - Optional known-word validation against word lists

mod dictionary;
mod strip;
mod tokenizer;
pub mod wordlists;

pub use dictionary::{DictionaryError, WordListDictionary, WordValidator};
pub use strip::{strip_boilerplate, strip_with_markers, END_MARKERS, START_MARKERS};
pub use tokenizer::Tokenizer;
