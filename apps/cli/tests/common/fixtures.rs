//! CSV fixtures.

/// Basic vocabulary rows, one malformed.
pub const BASIC_CSV: &str = "hola;hello\n\
                             adiós;goodbye\n\
                             gracias\n\
                             |por favor; señor|;please, sir\n";

/// Cloze rows, one without a deletion.
pub const CLOZE_CSV: &str = "{{c1::Madrid}} is the capital of Spain;geography\n\
                             El {{c1::perro}} come;the dog eats\n\
                             nothing to hide;oops\n";

/// Verb file with its pronoun header.
pub const VERB_CSV: &str = "yo;tú;él;nosotros;vosotros;ellos\n\
                            hablar;to speak;hablo;hablas;habla;hablamos;habláis;hablan\n\
                            comer;to eat;como;comes;come;comemos;coméis;comen\n\
                            vivir;to live;vivo\n";

/// Generate a basic CSV with `rows` notes.
pub fn basic_rows(rows: usize) -> String {
    (0..rows)
        .map(|i| format!("front {};back {}\n", i + 1, i + 1))
        .collect()
}
