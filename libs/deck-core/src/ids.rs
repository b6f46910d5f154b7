//! Deterministic deck and model identifiers.
//!
//! Anki matches decks and note types by numeric id on import, so the ids are
//! derived from the deck name: rebuilding a deck under the same name updates
//! it in place instead of creating a second copy.

use sha2::{Digest, Sha256};

use crate::types::PronounLabels;

/// Smallest id handed out (the first 10-digit number).
pub const ID_MIN: i64 = 1_000_000_000;

/// Number of distinct ids, so every id has exactly 10 digits.
const ID_SPAN: u64 = 9_000_000_000;

/// Separator between joined name parts.
const UNIT_SEPARATOR: char = '\u{1f}';

/// Derive a stable 10-digit id from a namespace and a name.
pub fn stable_id(namespace: &str, name: &str) -> i64 {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update([0u8]);
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    ID_MIN + (u64::from_be_bytes(prefix) % ID_SPAN) as i64
}

/// Id of the deck called `deck_name`.
pub fn deck_id(deck_name: &str) -> i64 {
    stable_id("deck", deck_name)
}

/// Id of the verb note type for a deck and pronoun header.
pub fn verb_model_id(deck_name: &str, labels: &PronounLabels) -> i64 {
    let sep = UNIT_SEPARATOR.to_string();
    let name = format!("{deck_name}{sep}{}", labels.join(&sep));
    stable_id("verb-model", &name)
}
