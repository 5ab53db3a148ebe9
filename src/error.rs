//! Domain errors for fixture generation and payload parsing.
//!
//! I/O and JSON failures travel as `anyhow::Error` with path context; the
//! variants here are the failures callers are expected to match on
//! (`err.downcast_ref::<tfgen::error::Error>()`).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Requested more words per sample than the word set holds.
    #[error("insufficient population: sample of {requested} words requested, only {available} distinct words available")]
    InsufficientPopulation { requested: usize, available: usize },

    #[error("weight range {start}..={end} is empty")]
    EmptyWeightRange { start: u32, end: u32 },

    /// Language tags are capitalized ASCII words (`Spanish`, `English`).
    #[error("invalid language tag: {0:?}")]
    InvalidLanguage(String),

    #[error("payload does not start with `language=<Language>&tfs=`")]
    MissingPrefix,

    #[error("payload does not end with a single trailing newline")]
    MissingTrailingNewline,

    #[error("sample {index} contains duplicate key {key:?}")]
    DuplicateKey { index: usize, key: String },
}
