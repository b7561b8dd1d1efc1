//! Result of processing a single book

use std::fmt;

/// What happened to one book during a harvest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Book was downloaded and its words counted
    Processed {
        /// Number of tokens added to the frequency table
        words: u64,
    },

    /// Book could not be downloaded from either URL and was skipped
    Failed {
        /// Description of the last failure
        reason: String,
    },
}

impl fmt::Display for DocumentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processed { words } => write!(f, "processed ({} words)", words),
            Self::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}
