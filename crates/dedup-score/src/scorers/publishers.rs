//! Publisher name comparison
//!
//! Names are normalized (ASCII, no punctuation except dots, no legal-form or
//! generic trade words), then compared token by token. Dotted abbreviations
//! ("GR.") match any token sharing their stem ("GROUP").

use strsim::jaro_winkler;

use crate::policy::{best_pairing, MissingValuePolicy};
use crate::text::{indel_ratio, length_penalty, strip_special_chars, to_ascii};

/// Minimum indel ratio for two tokens to count as the same word
const TOKEN_MATCH_THRESHOLD: f64 = 0.8;

/// Words that say nothing about which publisher is meant
const GENERIC_WORDS: &[&str] = &[
    "VERLAG", "VERLAGE", "PUBLISHER", "PUBLISHERS", "PUBLISHING", "EDITIONS", "EDITORIAL",
    "EDITORE", "EDITRICE", "EDICIONES", "EDITORA", "INC", "INC.", "LTD", "LTD.", "LIMITED", "LLC",
    "GMBH", "AG", "KG", "CO", "CO.", "CORP", "CORP.", "SA", "S.A.", "SPA", "S.P.A.", "SRL", "CIE",
    "CIE.",
];

/// Normalize a publisher name for comparison.
///
/// Generic words are only dropped when something else remains.
pub fn normalize_publisher(name: &str) -> String {
    let normalized = strip_special_chars(&to_ascii(name), true);
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .collect();

    let specific: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| !GENERIC_WORDS.contains(token))
        .collect();

    if specific.is_empty() {
        tokens.join(" ")
    } else {
        specific.join(" ")
    }
}

/// Raw similarity of two publisher names.
///
/// The token score is corrected by the Jaro-Winkler similarity of the whole
/// normalized names, which tolerates misspellings but not reorderings.
pub fn publisher_similarity(name1: &str, name2: &str) -> f64 {
    let norm1 = normalize_publisher(name1);
    let norm2 = normalize_publisher(name2);

    if norm1.is_empty() || norm2.is_empty() {
        return 0.0;
    }
    if norm1 == norm2 {
        return 1.0;
    }

    let factor = jaro_winkler(&norm1, &norm2);
    token_vector_similarity(&norm1, &norm2) * factor
}

/// Best publisher pairing between two lists of name variants.
pub fn evaluate_publishers<S: AsRef<str>>(
    publishers1: &[S],
    publishers2: &[S],
    policy: &MissingValuePolicy,
) -> f64 {
    best_pairing(publishers1, publishers2, |a, b| {
        policy.score(
            a.map(|name| name.as_ref()),
            b.map(|name| name.as_ref()),
            publisher_similarity,
        )
    })
}

/// Lower of the two directional token coverages, penalized for a token count
/// mismatch.
fn token_vector_similarity(text1: &str, text2: &str) -> f64 {
    let tokens1: Vec<&str> = text1.split_whitespace().collect();
    let tokens2: Vec<&str> = text2.split_whitespace().collect();

    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }

    let coverage1 = coverage(&tokens1, &tokens2);
    let coverage2 = coverage(&tokens2, &tokens1);
    let diff = tokens1.len().abs_diff(tokens2.len());

    length_penalty(diff) * coverage1.min(coverage2)
}

/// Mean best match of each token of `tokens` within `other`
fn coverage(tokens: &[&str], other: &[&str]) -> f64 {
    let total: f64 = tokens
        .iter()
        .map(|token| {
            other
                .iter()
                .map(|candidate| token_similarity(token, candidate))
                .fold(0.0, f64::max)
        })
        .sum();
    total / tokens.len() as f64
}

fn token_similarity(token1: &str, token2: &str) -> f64 {
    let stem1 = token1.trim_end_matches('.');
    let stem2 = token2.trim_end_matches('.');

    if stem1 == stem2 || is_abbreviation_of(token1, stem2) || is_abbreviation_of(token2, stem1) {
        return 1.0;
    }

    let ratio = indel_ratio(stem1, stem2);
    if ratio >= TOKEN_MATCH_THRESHOLD {
        ratio
    } else {
        0.0
    }
}

fn is_abbreviation_of(abbreviation: &str, word: &str) -> bool {
    match abbreviation.strip_suffix('.') {
        Some(stem) => !stem.is_empty() && word.len() > stem.len() && word.starts_with(stem),
        None => false,
    }
}
