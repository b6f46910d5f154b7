//! Note accumulation: classify every input, then read them in order.

use std::path::PathBuf;

use deck_core::{classify, deck_id, invalid_html_tags, parse_file, CardKind, ParsedFile};
use tracing::{debug, info, warn};

use crate::config::BuildConfig;

/// Notes gathered from all input files, ready to be packaged.
#[derive(Debug, Clone)]
pub struct DeckPlan {
    pub deck_name: String,
    pub deck_id: i64,
    pub files: Vec<ParsedFile>,
}

impl DeckPlan {
    pub fn note_count(&self) -> usize {
        self.files.iter().map(|f| f.notes.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.files.iter().map(|f| f.skipped.len()).sum()
    }
}

/// Read every input file into a plan.
///
/// All files are classified before any is read, so an unsupported file stops
/// the build before work is done.
pub fn collect(config: &BuildConfig) -> anyhow::Result<DeckPlan> {
    let names: Vec<String> = config
        .inputs
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    info!("Files parsed: {}", names.join(", "));

    if let Some(language) = &config.language {
        debug!(language = %language, "language flag is not used for deck generation");
    }

    let classified = config
        .inputs
        .iter()
        .map(|path| classify(path).map(|kind| (path.clone(), kind)))
        .collect::<Result<Vec<(PathBuf, CardKind)>, _>>()?;

    let mut files = Vec::with_capacity(classified.len());
    for (path, kind) in classified {
        if kind != CardKind::Basic {
            info!("{} detected to contain {}.", path.display(), kind.description());
        }

        let parsed = parse_file(&path, kind, &config.csv)?;

        for skipped in &parsed.skipped {
            warn!(
                file = %path.display(),
                line = skipped.line_number,
                "skipping row: {}",
                skipped.reason
            );
        }
        for note in &parsed.notes {
            for field in &note.fields {
                let tags = invalid_html_tags(field);
                if !tags.is_empty() {
                    warn!(
                        file = %path.display(),
                        line = note.line_number,
                        "field {field:?} contains invalid html tags {tags:?}"
                    );
                }
            }
        }
        debug!(
            file = %path.display(),
            kind = kind.as_str(),
            notes = parsed.notes.len(),
            skipped = parsed.skipped.len(),
            "file read"
        );

        files.push(parsed);
    }

    Ok(DeckPlan {
        deck_name: config.deck_name.clone(),
        deck_id: deck_id(&config.deck_name),
        files,
    })
}
