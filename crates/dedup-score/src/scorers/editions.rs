use crate::editions::{compare_edition_numbers, normalize_edition, EditionDictionary};
use crate::policy::{best_pairing, MissingValuePolicy};
use crate::record::Edition;
use crate::text::text_similarity;

/// Weight of the number overlap against the text similarity
const NUMBERS_WEIGHT: f64 = 9.0;

/// Raw similarity of two edition statements.
///
/// The edition number decides: when both statements carry numbers the
/// overlap counts nine times as much as the text. Otherwise only the
/// substituted texts are compared.
pub fn edition_similarity(
    edition1: &Edition,
    edition2: &Edition,
    dictionary: &EditionDictionary,
) -> f64 {
    let norm1 = normalize_edition(&edition1.text, dictionary);
    let norm2 = normalize_edition(&edition2.text, dictionary);

    let text_score = text_similarity(&norm1.text, &norm2.text);

    let numbers1 = merge_numbers(&edition1.numbers, &norm1.numbers);
    let numbers2 = merge_numbers(&edition2.numbers, &norm2.numbers);

    match compare_edition_numbers(&numbers1, &numbers2) {
        Some(numbers_score) => (text_score + numbers_score * NUMBERS_WEIGHT) / (1.0 + NUMBERS_WEIGHT),
        None => text_score,
    }
}

/// Best pairing between two lists of edition statements.
pub fn evaluate_editions(
    editions1: &[Edition],
    editions2: &[Edition],
    policy: &MissingValuePolicy,
    dictionary: &EditionDictionary,
) -> f64 {
    best_pairing(editions1, editions2, |a, b| {
        policy.score(a, b, |a, b| edition_similarity(a, b, dictionary))
    })
}

fn merge_numbers(recorded: &[u32], extracted: &[u64]) -> Vec<u64> {
    let mut numbers: Vec<u64> = recorded
        .iter()
        .map(|&n| u64::from(n))
        .chain(extracted.iter().copied())
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}
