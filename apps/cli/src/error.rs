//! Error types for the command line application.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid command line configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("deck name must not be empty")]
    EmptyDeckName,

    #[error("no input files given")]
    NoInputs,

    #[error("{which} must be a single ASCII character, got {value:?}")]
    NonAsciiChar { which: &'static str, value: char },

    #[error("delimiter and quote character must differ, both are {0:?}")]
    SameDelimiterAndQuote(char),
}

/// Failure while building or writing the deck package.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("invalid note from {} line {line}: {message}", path.display())]
    Note {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("verb file {} has no pronoun header", .0.display())]
    MissingPronouns(PathBuf),

    #[error("output path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}
