//! Package write: maps a [`DeckPlan`] onto `genanki-rs` notes and models.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use deck_core::templates::{
    verb_answer, verb_model_name, VERB_CSS, VERB_FIELDS, VERB_QUESTION, VERB_TEMPLATE_NAME,
};
use deck_core::{verb_model_id, CardKind, ParsedFile, PronounLabels};
use gag::Redirect;
use genanki_rs::{
    basic_and_reversed_card_model, cloze_model, Deck, Field, Model, Note, Package, Template,
};
use tracing::{debug, info, warn};

use crate::build::DeckPlan;
use crate::error::PackageError;

/// Build the verb note type for one pronoun header.
pub fn verb_model(deck_name: &str, labels: &PronounLabels) -> Model {
    Model::new_with_options(
        verb_model_id(deck_name, labels),
        &verb_model_name(labels),
        VERB_FIELDS.iter().map(|name| Field::new(name)).collect(),
        vec![Template::new(VERB_TEMPLATE_NAME)
            .qfmt(VERB_QUESTION)
            .afmt(&verb_answer(labels))],
        Some(VERB_CSS),
        None,
        None,
        None,
        None,
    )
}

/// Note types used by a plan, built once and shared across notes.
struct Models {
    cloze: Model,
    basic: Model,
    verbs: HashMap<PronounLabels, Model>,
}

impl Models {
    fn new() -> Self {
        Self {
            cloze: cloze_model(),
            basic: basic_and_reversed_card_model(),
            verbs: HashMap::new(),
        }
    }

    fn for_file(&mut self, deck_name: &str, file: &ParsedFile) -> Result<Model, PackageError> {
        match (file.kind, &file.pronouns) {
            (CardKind::Cloze, _) => Ok(self.cloze.clone()),
            (CardKind::Basic, _) => Ok(self.basic.clone()),
            (CardKind::Verb, Some(labels)) => Ok(self
                .verbs
                .entry(labels.clone())
                .or_insert_with(|| verb_model(deck_name, labels))
                .clone()),
            (CardKind::Verb, None) => Err(PackageError::MissingPronouns(file.path.clone())),
        }
    }
}

/// Assemble the deck for a plan.
pub fn build_deck(plan: &DeckPlan) -> Result<Deck, PackageError> {
    let description = format!("Generated from {} CSV file(s)", plan.files.len());
    let mut deck = Deck::new(plan.deck_id, &plan.deck_name, &description);
    let mut models = Models::new();

    for file in &plan.files {
        let model = models.for_file(&plan.deck_name, file)?;
        for record in &file.notes {
            let fields: Vec<&str> = record.fields.iter().map(String::as_str).collect();
            let note = Note::new(model.clone(), fields).map_err(|e| PackageError::Note {
                path: file.path.clone(),
                line: record.line_number,
                message: e.to_string(),
            })?;
            deck.add_note(note);
        }
    }

    debug!(
        deck_id = plan.deck_id,
        verb_models = models.verbs.len(),
        "deck assembled"
    );
    Ok(deck)
}

/// Write the plan as an `.apkg` package to `output`.
///
/// genanki prints its own diagnostics with `println!`; stdout is pointed at
/// stderr while it runs so stdout only ever carries the summary.
pub fn write_package(plan: &DeckPlan, output: &Path, media: &[PathBuf]) -> Result<(), PackageError> {
    let notes = plan.note_count();
    if notes == 0 {
        warn!(deck = %plan.deck_name, "no notes were accepted, writing an empty deck");
    }

    let redirect = match Redirect::stdout(std::io::stderr()) {
        Ok(redirect) => Some(redirect),
        Err(e) => {
            debug!(error = %e, "could not redirect stdout while packaging");
            None
        }
    };
    let result = write_deck(plan, output, media);
    let _ = std::io::stdout().flush();
    drop(redirect);
    result?;

    info!(
        path = %output.display(),
        notes,
        media = media.len(),
        "package written"
    );
    Ok(())
}

fn write_deck(plan: &DeckPlan, output: &Path, media: &[PathBuf]) -> Result<(), PackageError> {
    let deck = build_deck(plan)?;

    let output_str = output
        .to_str()
        .ok_or_else(|| PackageError::NonUtf8Path(output.to_path_buf()))?;
    let media_strs = media
        .iter()
        .map(|p| p.to_str().ok_or_else(|| PackageError::NonUtf8Path(p.clone())))
        .collect::<Result<Vec<&str>, _>>()?;

    let write_error = |message: String| PackageError::Write {
        path: output.to_path_buf(),
        message,
    };
    let mut package =
        Package::new(vec![deck], media_strs).map_err(|e| write_error(e.to_string()))?;
    package
        .write_to_file(output_str)
        .map_err(|e| write_error(e.to_string()))
}
