//! Token-level fuzzy alignment of two texts
//!
//! The shorter text (in tokens) slides over the longer one; at each offset
//! the tokens are compared pairwise with an indel ratio and the best mean
//! wins. A mild penalty is applied when the token counts differ.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"\w+").unwrap();
}

/// Split text into maximal runs of word characters.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Normalized indel similarity: `(len(a) + len(b) - indel(a, b)) / (len(a) + len(b))`.
///
/// Insertions and deletions cost 1 and substitutions cost 2, so the ratio
/// equals `2 * LCS / (len(a) + len(b))`. Two empty strings are identical.
pub fn indel_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    rapidfuzz::fuzz::ratio(a.chars(), b.chars())
}

/// Penalty coefficient for a token-count difference.
///
/// 1.0 for equal counts, then `diff^-0.05 - 0.15`, never below 0.
pub fn length_penalty(diff: usize) -> f64 {
    if diff == 0 {
        return 1.0;
    }
    ((diff as f64).powf(-0.05) - 0.15).max(0.0)
}

/// Similarity of two texts in `[0, 1]`.
///
/// Returns 0.0 when either text has no tokens.
pub fn text_similarity(text1: &str, text2: &str) -> f64 {
    let (text1, text2) = if text1.chars().count() < text2.chars().count() {
        (text2, text1)
    } else {
        (text1, text2)
    };

    let mut long = tokenize(text1);
    let mut short = tokenize(text2);
    if long.len() < short.len() {
        std::mem::swap(&mut long, &mut short);
    }

    if short.is_empty() {
        return 0.0;
    }

    let diff = long.len() - short.len();
    let best = (0..=diff)
        .map(|pos| {
            let total: f64 = short
                .iter()
                .zip(&long[pos..])
                .map(|(s, l)| indel_ratio(l, s))
                .sum();
            total / short.len() as f64
        })
        .fold(0.0, f64::max);

    (length_penalty(diff) * best).clamp(0.0, 1.0)
}
