//! Filename dispatch to a card kind.
//!
//! Rules are tried in order against the file name, first match wins:
//!
//! | pattern        | kind    |
//! |----------------|---------|
//! | `.*cloze.*csv` | `Cloze` |
//! | `.*verb.*csv`  | `Verb`  |
//! | `.*csv`        | `Basic` |

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{DeckError, Result};
use crate::types::CardKind;

lazy_static! {
    static ref RULES: [(Regex, CardKind); 3] = [
        (Regex::new(r"^.*cloze.*csv").expect("cloze pattern"), CardKind::Cloze),
        (Regex::new(r"^.*verb.*csv").expect("verb pattern"), CardKind::Verb),
        (Regex::new(r"^.*csv").expect("csv pattern"), CardKind::Basic),
    ];
}

/// Pick the card kind for a file from its name.
pub fn classify(path: &Path) -> Result<CardKind> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&name))
        .map(|(_, kind)| *kind)
        .ok_or_else(|| DeckError::UnsupportedFile {
            path: path.to_path_buf(),
        })
}
