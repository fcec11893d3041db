use std::collections::BTreeSet;

use crate::policy::MissingValuePolicy;

/// Exponent compressing the overlap toward 1
const OVERLAP_EXPONENT: f64 = 0.05;

/// Canonical form of an identifier: trimmed, upper case, without spaces
/// or hyphens (`978-3-16-148410-0` → `9783161484100`).
pub fn canonical_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Raw similarity of two identifier sets.
///
/// Jaccard index raised to the power 0.05: a single shared identifier is
/// strong evidence even among many unshared ones.
pub fn identifier_similarity(ids1: &BTreeSet<String>, ids2: &BTreeSet<String>) -> f64 {
    let union = ids1.union(ids2).count();
    if union == 0 {
        return 0.0;
    }

    let jaccard = ids1.intersection(ids2).count() as f64 / union as f64;
    if jaccard > 0.0 {
        jaccard.powf(OVERLAP_EXPONENT)
    } else {
        0.0
    }
}

/// Compare two collections of standard or system numbers.
pub fn evaluate_identifiers<I, S>(ids1: I, ids2: I, policy: &MissingValuePolicy) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids1 = canonical_set(ids1);
    let ids2 = canonical_set(ids2);
    policy.score(Some(&ids1), Some(&ids2), identifier_similarity)
}

fn canonical_set<I, S>(ids: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| canonical_identifier(id.as_ref()))
        .filter(|id| !id.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(ids1: &[&str], ids2: &[&str]) -> f64 {
        evaluate_identifiers(ids1, ids2, &MissingValuePolicy::default())
    }

    #[test]
    fn test_evaluate_identifiers() {
        assert!(evaluate(&["123"], &["123"]) > 0.9);

        let score = evaluate(&["123"], &["123", "456"]);
        assert!(0.9 < score && score < 1.0, "got {}", score);

        let score = evaluate(&["123"], &["456", "123", "222"]);
        assert!(0.8 < score && score < 0.96, "got {}", score);

        assert!(evaluate(&["123"], &["456"]) < 0.3);
    }

    #[test]
    fn test_canonical_identifiers() {
        assert_eq!(canonical_identifier(" 978-3-16-148410-0 "), "9783161484100");
        assert_eq!(canonical_identifier("3-16-14841-x"), "31614841X");
        assert_eq!(evaluate(&["978-3-16-148410-0"], &["9783161484100"]), 1.0);
    }

    #[test]
    fn test_missing_identifiers() {
        assert_eq!(evaluate(&[], &["123"]), 0.1);
        assert_eq!(evaluate(&[" "], &[]), 0.0);
    }

    #[test]
    fn test_identifier_similarity_empty_union() {
        assert_eq!(identifier_similarity(&BTreeSet::new(), &BTreeSet::new()), 0.0);
    }
}
