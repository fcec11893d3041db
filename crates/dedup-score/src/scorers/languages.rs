use std::collections::BTreeSet;

use crate::policy::MissingValuePolicy;

/// Floor reached when the primary languages agree
const PRIMARY_MATCH_FLOOR: f64 = 0.7;

/// Raw similarity of two language lists, primary language first.
///
/// Jaccard index of the codes, lifted into `[0.7, 1]` when the first codes
/// agree.
pub fn language_similarity(languages1: &[String], languages2: &[String]) -> f64 {
    let set1: BTreeSet<&str> = languages1.iter().map(String::as_str).collect();
    let set2: BTreeSet<&str> = languages2.iter().map(String::as_str).collect();

    let union = set1.union(&set2).count();
    if union == 0 {
        return 0.0;
    }
    let jaccard = set1.intersection(&set2).count() as f64 / union as f64;

    if languages1.first() == languages2.first() {
        PRIMARY_MATCH_FLOOR + (1.0 - PRIMARY_MATCH_FLOOR) * jaccard
    } else {
        jaccard
    }
}

pub fn evaluate_languages<S: AsRef<str>>(
    languages1: &[S],
    languages2: &[S],
    policy: &MissingValuePolicy,
) -> f64 {
    let languages1 = normalize_codes(languages1);
    let languages2 = normalize_codes(languages2);
    policy.score(Some(&languages1), Some(&languages2), |a, b| {
        language_similarity(a, b)
    })
}

fn normalize_codes<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    codes
        .iter()
        .map(|code| code.as_ref().trim().to_lowercase())
        .filter(|code| !code.is_empty())
        .collect()
}
