//! Verb conjugation note type.
//!
//! Rows of a verb file carry the infinitive, its translation and the six
//! conjugated forms. The answer side lays the forms out as a 3x2 table with
//! persons as rows and number as columns, each cell prefixed by the pronoun
//! from the file's header row.

use crate::types::PronounLabels;

/// Field names in CSV column order.
pub const VERB_FIELDS: [&str; 8] = [
    "Infinitive",
    "Translation",
    "SingularFirst",
    "SingularSecond",
    "SingularThird",
    "PluralFirst",
    "PluralSecond",
    "PluralThird",
];

pub const VERB_TEMPLATE_NAME: &str = "Verb conjugation";

pub const VERB_CSS: &str = "table, td {border: 1px solid;}\
                            table {border-spacing:0; margin:auto;}\
                            td {padding:.5rem;}";

pub const VERB_QUESTION: &str = r#"<p style="text-align:center;">{{Translation}}</p>"#;

/// Note type name for a pronoun header.
pub fn verb_model_name(labels: &PronounLabels) -> String {
    format!("{VERB_TEMPLATE_NAME} ({})", labels.join("/"))
}

/// Answer side of the verb card.
pub fn verb_answer(labels: &PronounLabels) -> String {
    let mut html = String::new();
    html.push_str(VERB_QUESTION);
    html.push_str(r#"<p style="text-align:center;"><b>{{Infinitive}}</b><hr id="answer"></p>"#);
    html.push_str("<table>");

    let persons = ["First", "Second", "Third"];
    for (i, person) in persons.iter().enumerate() {
        html.push_str("<tr>");
        html.push_str(&cell(&labels.singular()[i], &format!("Singular{person}")));
        html.push_str(&cell(&labels.plural()[i], &format!("Plural{person}")));
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}

fn cell(label: &str, field: &str) -> String {
    format!("<td>{} {{{{{field}}}}}</td>", escape_label(label))
}

/// HTML-escape a label and neutralize braces so it cannot open a template tag.
fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}
