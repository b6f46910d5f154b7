//! Detection of malformed HTML tags in field text.
//!
//! Anki renders fields as HTML, so a stray `<` such as `a < b > c` is read
//! as a broken tag. The packaging library flags these on its own; checking
//! here lets them be reported alongside the other row diagnostics.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_CANDIDATE: Regex = Regex::new(r"(?s)<[^>]*>").expect("tag candidate pattern");
    static ref VALID_TAG: Regex =
        Regex::new(r"(?s)^(?:</?[a-zA-Z0-9]+(?: .*|/?)>|<!--.*|<!\[CDATA\[.*)$")
            .expect("valid tag pattern");
}

/// Every `<...>` span in `text` that is not a well-formed tag, comment or
/// CDATA section.
pub fn invalid_html_tags(text: &str) -> Vec<&str> {
    TAG_CANDIDATE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|tag| !VALID_TAG.is_match(tag))
        .collect()
}
