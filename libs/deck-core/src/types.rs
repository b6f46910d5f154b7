//! Core types for CSV deck building.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of subject-pronoun labels in a verb file header.
pub const PRONOUN_COUNT: usize = 6;

/// Card template a CSV file is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Cloze,
    Basic,
    Verb,
}

impl CardKind {
    /// Number of fields a row must have to become a note.
    pub fn field_count(self) -> usize {
        match self {
            Self::Cloze | Self::Basic => 2,
            Self::Verb => 8,
        }
    }

    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cloze => "cloze",
            Self::Basic => "basic",
            Self::Verb => "verb",
        }
    }

    /// Human readable description for log output.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Cloze => "cloze flashcards",
            Self::Basic => "basic flashcards",
            Self::Verb => "verb conjugation flashcards",
        }
    }
}

/// The six subject pronouns heading a verb file, in the order
/// singular 1st/2nd/3rd then plural 1st/2nd/3rd.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PronounLabels([String; PRONOUN_COUNT]);

impl PronounLabels {
    /// Build labels from a header row. Returns `None` unless the row has
    /// exactly six non-blank fields.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        if fields.len() != PRONOUN_COUNT {
            return None;
        }
        let labels: Vec<String> = fields.iter().map(|f| f.as_ref().trim().to_string()).collect();
        if labels.iter().any(String::is_empty) {
            return None;
        }
        labels.try_into().ok().map(Self)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn singular(&self) -> &[String] {
        &self.0[..3]
    }

    pub fn plural(&self) -> &[String] {
        &self.0[3..]
    }

    /// Join the labels with a separator.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

/// A CSV row accepted as a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub kind: CardKind,
    pub fields: Vec<String>,
    pub line_number: usize,
}

/// Why a row did not become a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    FieldCount { expected: usize, found: usize },
    Blank,
    NoClozeDeletion,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::Blank => f.write_str("all fields are empty"),
            Self::NoClozeDeletion => f.write_str("no cloze deletion in text"),
        }
    }
}

/// A row that was read but not turned into a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Everything read from one CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub kind: CardKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<PronounLabels>,
    pub notes: Vec<NoteRecord>,
    pub skipped: Vec<SkippedRow>,
}
