//! Edition statement normalization and number comparison

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::dictionary::EditionDictionary;
use crate::text::{strip_special_chars, to_ascii};

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// An edition statement after dictionary substitution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedEdition {
    /// Every number in the substituted text, ascending
    pub numbers: Vec<u64>,
    /// The substituted text, kept for textual comparison
    pub text: String,
}

/// Normalize an edition statement and extract its numbers.
///
/// "First Edition 1996" becomes `1 EDITION 1996` with numbers `[1, 1996]`.
pub fn normalize_edition(edition: &str, dictionary: &EditionDictionary) -> NormalizedEdition {
    let text = strip_special_chars(&to_ascii(edition), true);
    let text = dictionary.substitute(&text);

    // Runs are all digits, so parsing only fails on overflow
    let mut numbers: Vec<u64> = DIGITS_REGEX
        .find_iter(&text)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .collect();
    numbers.sort_unstable();

    NormalizedEdition { numbers, text }
}

/// Overlap coefficient of two number lists.
///
/// `|A ∩ B| / max(|A|, |B|)` over the distinct values, or `None` when either
/// side has no numbers and the caller should compare texts only.
pub fn compare_edition_numbers(numbers1: &[u64], numbers2: &[u64]) -> Option<f64> {
    if numbers1.is_empty() || numbers2.is_empty() {
        return None;
    }

    let set1: BTreeSet<u64> = numbers1.iter().copied().collect();
    let set2: BTreeSet<u64> = numbers2.iter().copied().collect();
    let common = set1.intersection(&set2).count();

    Some(common as f64 / set1.len().max(set2.len()) as f64)
}
