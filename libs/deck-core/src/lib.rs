//! Core library for turning CSV records into flashcard notes.
//!
//! Provides:
//! - Filename dispatch to a card kind (cloze, basic, verb conjugation)
//! - CSV reader with per-kind row gating
//! - Deterministic deck and model identifiers
//! - Verb conjugation templates
//! - Malformed HTML tag detection in field text

pub mod classify;
pub mod error;
pub mod html;
pub mod ids;
pub mod parser;
pub mod templates;
pub mod types;

pub use classify::classify;
pub use error::{DeckError, Result};
pub use html::invalid_html_tags;
pub use ids::{deck_id, stable_id, verb_model_id};
pub use parser::{parse_file, parse_records, read_records, CsvOptions};
pub use types::{
    CardKind, NoteRecord, ParsedFile, PronounLabels, SkipReason, SkippedRow, PRONOUN_COUNT,
};
