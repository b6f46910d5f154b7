//! Build summary printed on stdout.

use std::fmt::Write as _;
use std::path::PathBuf;

use deck_core::{CardKind, SkippedRow};
use serde::Serialize;

use crate::build::DeckPlan;

/// Per-file outcome.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub kind: CardKind,
    pub notes: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Outcome of a whole build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub deck_name: String,
    pub deck_id: i64,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub files: Vec<FileSummary>,
    pub total_notes: usize,
    pub total_skipped: usize,
}

impl BuildSummary {
    pub fn new(plan: &DeckPlan, output: Option<PathBuf>) -> Self {
        Self {
            deck_name: plan.deck_name.clone(),
            deck_id: plan.deck_id,
            output,
            files: plan
                .files
                .iter()
                .map(|f| FileSummary {
                    path: f.path.clone(),
                    kind: f.kind,
                    notes: f.notes.len(),
                    skipped: f.skipped.clone(),
                })
                .collect(),
            total_notes: plan.note_count(),
            total_skipped: plan.skipped_count(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for file in &self.files {
            let _ = writeln!(
                out,
                "{} ({}): {} notes, {} skipped",
                file.path.display(),
                file.kind.as_str(),
                file.notes,
                file.skipped.len()
            );
        }
        let _ = writeln!(
            out,
            "Deck \"{}\" (id {}): {} notes, {} rows skipped",
            self.deck_name, self.deck_id, self.total_notes, self.total_skipped
        );
        match &self.output {
            Some(path) => {
                let _ = writeln!(out, "Anki deck file {} was generated", path.display());
            }
            None => out.push_str("Dry run, no deck file was written\n"),
        }
        out
    }
}
