//! Error types for butterxml operations.

use thiserror::Error;

/// Errors that can occur while loading external content.
///
/// The parse/expand/serialize core never fails: undefined references,
/// arity mismatches, and unbalanced braces are all recovered in-document.
/// Errors surface only at the I/O seams (content loading, the CLI).
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("content reference not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
