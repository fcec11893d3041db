//! Text normalization for field comparison

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref SPECIAL_CHARS: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref SPECIAL_CHARS_KEEP_DOT: Regex = Regex::new(r"[^\w\s.]").unwrap();
}

/// Fold text to upper-case ASCII
///
/// - Unicode decomposition (NFKD) separates diacritics from base letters
/// - Converts to uppercase
/// - Drops everything left outside ASCII
pub fn to_ascii(text: &str) -> String {
    text.nfkd()
        .collect::<String>()
        .to_uppercase()
        .chars()
        .filter(char::is_ascii)
        .collect()
}

/// Replace every character that is neither a word character nor whitespace
/// with a space, then collapse whitespace. Dots survive when `keep_dot` is set.
pub fn strip_special_chars(text: &str, keep_dot: bool) -> String {
    let pattern = if keep_dot {
        &*SPECIAL_CHARS_KEEP_DOT
    } else {
        &*SPECIAL_CHARS
    };
    collapse_whitespace(&pattern.replace_all(text, " "))
}

/// Collapse runs of whitespace into a single space and trim the ends
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.trim().chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}

/// Expand dotted abbreviations using the other text.
///
/// A word ending with `.` that appears in only one text is replaced by the
/// longest word of the other text (also absent from the first) that starts
/// with the abbreviation stem: with "UNIV. OF BERN" and "UNIVERSITY OF BERN"
/// the first becomes "UNIVERSITY OF BERN".
pub fn solve_abbreviations(txt1: &str, txt2: &str) -> (String, String) {
    if !(txt1.contains('.') || txt2.contains('.')) {
        return (txt1.to_string(), txt2.to_string());
    }

    let words1: BTreeSet<&str> = txt1.split_whitespace().collect();
    let words2: BTreeSet<&str> = txt2.split_whitespace().collect();
    let only1: BTreeSet<&str> = words1.difference(&words2).copied().collect();
    let only2: BTreeSet<&str> = words2.difference(&words1).copied().collect();

    (expand_words(txt1, &only1, &only2), expand_words(txt2, &only2, &only1))
}

fn expand_words(text: &str, own_words: &BTreeSet<&str>, other_words: &BTreeSet<&str>) -> String {
    text.split_whitespace()
        .map(|word| {
            if !own_words.contains(word) {
                return word;
            }
            let Some(stem) = word.strip_suffix('.') else {
                return word;
            };
            other_words
                .iter()
                .filter(|candidate| candidate.starts_with(stem))
                .max_by_key(|candidate| candidate.len())
                .copied()
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
