//! Typed error values for corpus loading.
//!
//! Replaces the source's `NULL`-return-plus-`errno` idiom: a required file
//! that can't be opened, or a line that can't be parsed, surfaces as a
//! `SpellError` instead of an opaque `None`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    #[error("required corpus file not found: {path:?}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed corpus line {line_no} in {path:?}: {reason}")]
    MalformedCorpus {
        path: PathBuf,
        line_no: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SpellError>;
