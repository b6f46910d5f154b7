//! Error types for deck-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while classifying or reading CSV files.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("the format of the file \"{}\" is not supported", path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {} at line {line}: {message}", path.display())]
    Csv {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("verb file {} is empty, expected a pronoun header row", path.display())]
    MissingPronouns { path: PathBuf },

    #[error("verb file {} has an invalid pronoun header: expected 6 non-empty labels, found {found} fields", path.display())]
    InvalidPronouns { path: PathBuf, found: usize },
}
