//! CSV reader for flashcard files.
//!
//! # Format
//! ```text
//! hola;hello
//! |uno; dos|;one; two
//! ```
//!
//! Files have no header row, fields are separated by `;` and quoted with `|`
//! by default. Verb files are the exception: their first row holds the six
//! subject pronouns used to label the conjugation table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{DeckError, Result};
use crate::types::{CardKind, NoteRecord, ParsedFile, PronounLabels, SkipReason, SkippedRow};

lazy_static! {
    static ref CLOZE_DELETION: Regex =
        Regex::new(r"(?s)\{\{c[1-9]\d*::.+?\}\}").expect("cloze deletion pattern");
}

/// Delimiter and quote character used to split records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: b'|',
        }
    }
}

/// A raw record with its 1-based line number.
pub type Record = (usize, Vec<String>);

/// Read every record from `reader`.
pub fn read_records<R: Read>(reader: R, options: &CsvOptions) -> csv::Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .quote(options.quote)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(records.len() + 1, |p| p.line() as usize);
        records.push((line, record.iter().map(str::to_string).collect()));
    }
    Ok(records)
}

/// Read and gate a CSV file as `kind`.
pub fn parse_file(path: &Path, kind: CardKind, options: &CsvOptions) -> Result<ParsedFile> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DeckError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DeckError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let records = read_records(file, options).map_err(|e| DeckError::Csv {
        path: path.to_path_buf(),
        line: e.position().map_or(0, |p| p.line() as usize),
        message: e.to_string(),
    })?;

    parse_records(path, kind, records)
}

/// Gate already-read records: split off the verb header and keep rows with
/// the field count `kind` expects.
pub fn parse_records(path: &Path, kind: CardKind, records: Vec<Record>) -> Result<ParsedFile> {
    let mut rows = records.into_iter();

    let pronouns = match kind {
        CardKind::Verb => {
            let (_, header) = rows.next().ok_or_else(|| DeckError::MissingPronouns {
                path: path.to_path_buf(),
            })?;
            let labels =
                PronounLabels::from_fields(&header).ok_or_else(|| DeckError::InvalidPronouns {
                    path: path.to_path_buf(),
                    found: header.len(),
                })?;
            Some(labels)
        }
        CardKind::Cloze | CardKind::Basic => None,
    };

    let mut notes = Vec::new();
    let mut skipped = Vec::new();

    for (line_number, fields) in rows {
        match check_row(kind, &fields) {
            Some(reason) => skipped.push(SkippedRow {
                line_number,
                reason,
            }),
            None => notes.push(NoteRecord {
                kind,
                fields,
                line_number,
            }),
        }
    }

    Ok(ParsedFile {
        path: path.to_path_buf(),
        kind,
        pronouns,
        notes,
        skipped,
    })
}

fn check_row(kind: CardKind, fields: &[String]) -> Option<SkipReason> {
    let expected = kind.field_count();
    if fields.len() != expected {
        return Some(SkipReason::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    if fields.iter().all(|f| f.trim().is_empty()) {
        return Some(SkipReason::Blank);
    }
    if kind == CardKind::Cloze && !CLOZE_DELETION.is_match(&fields[0]) {
        return Some(SkipReason::NoClozeDeletion);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn parse(kind: CardKind, input: &str) -> Result<ParsedFile> {
        let records = read_records(input.as_bytes(), &CsvOptions::default()).unwrap();
        parse_records(Path::new("test.csv"), kind, records)
    }

    #[test]
    fn read_semicolon_records() {
        let records = read_records("a;b\nc;d;e\n".as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(
            records,
            vec![
                (1, vec!["a".to_string(), "b".to_string()]),
                (2, vec!["c".to_string(), "d".to_string(), "e".to_string()]),
            ]
        );
    }

    #[test]
    fn pipe_quotes_protect_delimiters() {
        let records = read_records("|one; two|;uno\n".as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(records[0].1, vec!["one; two", "uno"]);
    }

    #[test]
    fn double_quotes_are_plain_text() {
        let records = read_records("\"quoted\";text\n".as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(records[0].1, vec!["\"quoted\"", "text"]);
    }

    #[test]
    fn custom_delimiter() {
        let options = CsvOptions {
            delimiter: b',',
            quote: b'"',
        };
        let records = read_records("\"a,b\",c\n".as_bytes(), &options).unwrap();
        assert_eq!(records[0].1, vec!["a,b", "c"]);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"ok;fine\n\xff\xfe;bad\n";
        let result = read_records(bytes, &CsvOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn basic_rows_gate_on_two_fields() {
        let parsed = parse(CardKind::Basic, "hola;hello\nsolo\na;b;c\nadiós;goodbye\n").unwrap();
        assert_eq!(parsed.notes.len(), 2);
        assert_eq!(parsed.notes[0].fields, vec!["hola", "hello"]);
        assert_eq!(parsed.notes[1].line_number, 4);
        assert_eq!(
            parsed.skipped,
            vec![
                SkippedRow {
                    line_number: 2,
                    reason: SkipReason::FieldCount { expected: 2, found: 1 },
                },
                SkippedRow {
                    line_number: 3,
                    reason: SkipReason::FieldCount { expected: 2, found: 3 },
                },
            ]
        );
        assert!(parsed.pronouns.is_none());
    }

    #[test]
    fn blank_rows_are_skipped() {
        let parsed = parse(CardKind::Basic, ";\nfront;back\n").unwrap();
        assert_eq!(parsed.notes.len(), 1);
        assert_eq!(parsed.skipped[0].reason, SkipReason::Blank);
    }

    #[test]
    fn cloze_rows_need_a_deletion() {
        let parsed = parse(
            CardKind::Cloze,
            "{{c1::Madrid}} is the capital of Spain;geography\nno deletion here;extra\n",
        )
        .unwrap();
        assert_eq!(parsed.notes.len(), 1);
        assert_eq!(parsed.skipped[0].line_number, 2);
        assert_eq!(parsed.skipped[0].reason, SkipReason::NoClozeDeletion);
    }

    #[test]
    fn unclosed_cloze_deletion_is_skipped() {
        let parsed = parse(CardKind::Cloze, "{{c1::Madrid is the capital;x\n").unwrap();
        assert!(parsed.notes.is_empty());
        assert_eq!(parsed.skipped[0].reason, SkipReason::NoClozeDeletion);
    }

    #[test]
    fn cloze_zero_is_not_a_deletion() {
        let parsed = parse(CardKind::Cloze, "{{c0::zero}};y\n").unwrap();
        assert!(parsed.notes.is_empty());
        assert_eq!(parsed.skipped[0].reason, SkipReason::NoClozeDeletion);
    }

    #[test]
    fn higher_cloze_numbers_are_accepted() {
        let parsed = parse(CardKind::Cloze, "{{c2::dos}} y {{c10::diez}};n\n").unwrap();
        assert_eq!(parsed.notes.len(), 1);
    }

    #[test]
    fn verb_header_becomes_pronouns() {
        let input = "yo;tú;él;nosotros;vosotros;ellos\n\
                     hablar;to speak;hablo;hablas;habla;hablamos;habláis;hablan\n\
                     comer;to eat;como\n";
        let parsed = parse(CardKind::Verb, input).unwrap();
        let pronouns = parsed.pronouns.unwrap();
        assert_eq!(pronouns.as_slice()[3], "nosotros");
        assert_eq!(parsed.notes.len(), 1);
        assert_eq!(parsed.notes[0].fields[0], "hablar");
        assert_eq!(parsed.notes[0].line_number, 2);
        assert_eq!(
            parsed.skipped[0].reason,
            SkipReason::FieldCount { expected: 8, found: 3 }
        );
    }

    #[test]
    fn verb_header_is_never_a_card() {
        let input = "yo;tú;él;nosotros;vosotros;ellos\n";
        let parsed = parse(CardKind::Verb, input).unwrap();
        assert!(parsed.notes.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn empty_verb_file_is_rejected() {
        let result = parse(CardKind::Verb, "");
        assert!(matches!(result, Err(DeckError::MissingPronouns { .. })));
    }

    #[test]
    fn short_verb_header_is_rejected() {
        let result = parse(
            CardKind::Verb,
            "hablar;to speak;hablo;hablas;habla;hablamos;habláis;hablan\n",
        );
        assert!(matches!(
            result,
            Err(DeckError::InvalidPronouns { found: 8, .. })
        ));
    }

    #[test]
    fn empty_basic_file_has_no_notes() {
        let parsed = parse(CardKind::Basic, "").unwrap();
        assert!(parsed.notes.is_empty());
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "perro;dog").unwrap();
        writeln!(file, "gato;cat").unwrap();

        let parsed = parse_file(file.path(), CardKind::Basic, &CsvOptions::default()).unwrap();
        assert_eq!(parsed.notes.len(), 2);
        assert_eq!(parsed.path, file.path());
    }

    #[test]
    fn missing_file_is_reported() {
        let result = parse_file(
            Path::new("/nonexistent/words.csv"),
            CardKind::Basic,
            &CsvOptions::default(),
        );
        assert!(matches!(result, Err(DeckError::FileNotFound { .. })));
    }
}
