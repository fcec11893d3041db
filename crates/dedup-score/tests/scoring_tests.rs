//! Field scorer integration tests
//!
//! Reference vectors for every field scorer, plus end-to-end comparisons of
//! brief record fixtures.

mod common;

use std::collections::BTreeSet;

use common::fixtures::load_record;
use dedup_score::editions::normalize_edition;
use dedup_score::extent::{calc_with_sets, calc_with_sum, rounded_extent};
use dedup_score::scorers::{
    edition_similarity, evaluate_identifiers, evaluate_languages, evaluate_publishers,
    evaluate_years,
};
use dedup_score::{
    evaluate_records, Edition, EditionDictionary, Field, MissingValuePolicy, RecordComparator,
    ScoringConfig,
};
use rstest::rstest;

fn set(values: &[u32]) -> BTreeSet<u32> {
    values.iter().copied().collect()
}

fn in_range(score: f64, low: f64, high: f64) -> bool {
    low < score && score < high
}

// === Edition Normalization ===

#[rstest]
#[case("17. Auflage, Originalausgabe", &[17], "17. AUFLAGE ORIGINALAUSGABE")]
#[case("First Edition 1996", &[1, 1996], "1 EDITION 1996")]
#[case(
    "Nachdr. der 2. vermehrten Aufl., Leipzig 1854 stattdessen auf dem Originaltitel unzutreffend 1853",
    &[2, 1853, 1854],
    "NACHDR. DER 2. VERMEHRTEN AUFL. LEIPZIG 1854 STATTDESSEN AUF DEM ORIGINALTITEL UNZUTREFFEND 1853"
)]
#[case("Harrison's edition", &[], "HARRISON S EDITION")]
#[case("2. Aufl., hrsg. v. Hans Müller", &[2], "2. AUFL. HRSG. V. HANS MULLER")]
#[case("Nachdruck 12345678901", &[12345678901], "NACHDRUCK 12345678901")]
fn test_normalize_edition(#[case] edition: &str, #[case] numbers: &[u64], #[case] text: &str) {
    let normalized = normalize_edition(edition, &EditionDictionary::shared());
    assert_eq!(normalized.numbers, numbers, "edition: {}", edition);
    assert_eq!(normalized.text, text, "edition: {}", edition);
}

#[rstest]
#[case("17. Auflage, Originalausgabe", "16. Auflage, Originalausgabe", 0.0, 0.1)]
#[case("17. Auflage, Originalausgabe", "17. Auflage", 0.9, 1.01)]
#[case("2. Aufl., hrsg. v. Hans Müller", "2. Aufl.", 0.9, 1.01)]
#[case("Sec. Auflage, Originalausgabe", "2. Auflage", 0.9, 1.01)]
fn test_edition_similarity(
    #[case] edition1: &str,
    #[case] edition2: &str,
    #[case] low: f64,
    #[case] high: f64,
) {
    let dictionary = EditionDictionary::shared();
    let score = edition_similarity(
        &Edition::new(vec![], edition1),
        &Edition::new(vec![], edition2),
        &dictionary,
    );
    assert!(
        low <= score && score < high,
        "{} / {}: got {}",
        edition1,
        edition2,
        score
    );
}

// === Extent ===

#[rstest]
#[case(&[5, 15, 25], &[5, 10, 15, 20])]
#[case(&[10, 20, 30], &[10, 20, 30])]
#[case(&[1, 2, 3], &[1, 2, 3])]
#[case(&[21, 22, 23], &[10, 20])]
fn test_rounded_extent(#[case] values: &[u32], #[case] expected: &[u32]) {
    assert_eq!(rounded_extent(&set(values)), set(expected));
}

#[rstest]
#[case(&[10, 20, 30], &[10, 20, 30], 0.99, 1.01)]
#[case(&[23, 182], &[20, 181], -0.01, 0.1)]
#[case(&[1, 180, 170], &[180, 170], 0.99, 1.01)]
#[case(&[10, 20, 30], &[30, 40], -0.01, 0.3)]
#[case(&[15, 190, 200], &[190, 200], 0.6, 1.01)]
fn test_calc_with_sets(
    #[case] values1: &[u32],
    #[case] values2: &[u32],
    #[case] low: f64,
    #[case] high: f64,
) {
    let score = calc_with_sets(&set(values1), &set(values2));
    assert!(in_range(score, low, high), "got {}", score);
}

#[rstest]
#[case(&[10, 200], &[15, 201], 0.7, 1.01)]
#[case(&[10, 200], &[210], 0.99, 1.01)]
#[case(&[10, 200], &[212], 0.9, 1.01)]
#[case(&[10, 20, 30], &[10, 20], -0.01, 0.1)]
fn test_calc_with_sum(
    #[case] values1: &[u32],
    #[case] values2: &[u32],
    #[case] low: f64,
    #[case] high: f64,
) {
    let score = calc_with_sum(values1, values2);
    assert!(in_range(score, low, high), "got {}", score);
}

// === Years ===

#[rstest]
#[case(2000, 0.9, 1.01)]
#[case(2001, 0.8, 1.0)]
#[case(2002, 0.6, 1.0)]
#[case(2005, 0.2, 0.4)]
#[case(2006, 0.2, 0.3)]
#[case(2007, 0.2, 0.3)]
fn test_evaluate_years(#[case] year: i32, #[case] low: f64, #[case] high: f64) {
    let score = evaluate_years(2000, year, &MissingValuePolicy::default());
    assert!(in_range(score, low, high), "2000 / {}: got {}", year, score);
}

// === Languages ===

#[rstest]
#[case(&["eng"], &["eng"], 0.9, 1.01)]
#[case(&["eng"], &["fr", "eng"], 0.5, 0.7)]
#[case(&["eng"], &["eng", "fr"], 0.85, 0.95)]
#[case(&["eng"], &["ger"], 0.0, 0.5)]
fn test_evaluate_languages(
    #[case] languages1: &[&str],
    #[case] languages2: &[&str],
    #[case] low: f64,
    #[case] high: f64,
) {
    let score = evaluate_languages(languages1, languages2, &MissingValuePolicy::default());
    assert!(in_range(score, low, high), "got {}", score);
}

// === Identifiers ===

#[rstest]
#[case(&["123"], &["123"], 0.9, 1.01)]
#[case(&["123"], &["123", "456"], 0.9, 1.0)]
#[case(&["123"], &["456", "123", "222"], 0.8, 0.96)]
#[case(&["123"], &["456"], 0.0, 0.3)]
#[case(&["978-3-16-148410-0"], &["9783161484100"], 0.99, 1.01)]
fn test_evaluate_identifiers(
    #[case] ids1: &[&str],
    #[case] ids2: &[&str],
    #[case] low: f64,
    #[case] high: f64,
) {
    let score = evaluate_identifiers(ids1, ids2, &MissingValuePolicy::default());
    assert!(in_range(score, low, high), "got {}", score);
}

// === Publishers ===

#[rstest]
#[case(&["Springer"], &["Springer"], 0.9, 1.01)]
#[case(&["Springer"], &["Springer Nature"], 0.4, 0.6)]
#[case(&["Springer Nature Gr."], &["Springer Nature Group"], 0.95, 1.01)]
#[case(&["Springer"], &["Payot", "Springer"], 0.9, 1.01)]
#[case(&["Bärenreiter-Verlag"], &["Bärenreiter"], 0.99, 1.01)]
fn test_evaluate_publishers(
    #[case] publishers1: &[&str],
    #[case] publishers2: &[&str],
    #[case] low: f64,
    #[case] high: f64,
) {
    let policy = MissingValuePolicy::default();
    let score = evaluate_publishers(publishers1, publishers2, &policy);
    assert!(in_range(score, low, high), "got {}", score);

    let reversed = evaluate_publishers(publishers2, publishers1, &policy);
    assert!((score - reversed).abs() < 1e-9);
}

// === End-to-End Records ===

#[test]
fn test_same_publication_described_twice() {
    let scores = evaluate_records(
        &load_record("book_2e.json"),
        &load_record("book_2e_variant.json"),
    );

    assert!(scores.format > 0.99);
    assert!(in_range(scores.languages, 0.85, 0.95));
    assert!(scores.publishers > 0.99);
    assert!(scores.editions > 0.9);
    assert!(scores.extent > 0.85);
    assert!(scores.years > 0.99);
    assert!(scores.std_nums > 0.99);
    assert_eq!(scores.sys_nums, 0.1);
}

#[test]
fn test_different_publications() {
    let scores = evaluate_records(&load_record("book_2e.json"), &load_record("book_other.json"));

    assert!(scores.format > 0.99);
    for field in [
        Field::Languages,
        Field::Publishers,
        Field::Editions,
        Field::Extent,
        Field::Years,
        Field::StdNums,
        Field::SysNums,
    ] {
        let score = scores.get(field);
        assert!(score < 0.3, "{}: got {}", field, score);
    }
}

#[test]
fn test_notated_music_materials_differ() {
    let scores = evaluate_records(
        &load_record("score_full.json"),
        &load_record("score_only.json"),
    );

    assert_eq!(scores.extent, 0.2);
    assert!(scores.publishers > 0.99);
    assert!(scores.years > 0.99);
    assert_eq!(scores.editions, 0.0);
}

#[test]
fn test_record_comparison_symmetric() {
    let names = [
        "book_2e.json",
        "book_2e_variant.json",
        "book_other.json",
        "score_full.json",
        "score_only.json",
    ];
    let comparator = RecordComparator::new(ScoringConfig::default()).unwrap();

    for a in names {
        for b in names {
            let ab = comparator.compare(&load_record(a), &load_record(b));
            let ba = comparator.compare(&load_record(b), &load_record(a));
            for ((field, x), (_, y)) in ab.iter().zip(ba.iter()) {
                assert!((x - y).abs() < 1e-9, "{} / {} {}: {} != {}", a, b, field, x, y);
            }
        }
    }
}

#[test]
fn test_custom_dictionary() {
    let dictionary = EditionDictionary::from_json(r#"{"ZWOTE": 2, "DRITTE": 3}"#).unwrap();
    let comparator = RecordComparator::with_dictionary(
        ScoringConfig::default(),
        std::sync::Arc::new(dictionary),
    )
    .unwrap();

    let mut a = load_record("book_other.json");
    a.editions = vec![Edition::new(vec![], "Zwote Auflage")];
    let mut b = a.clone();
    b.editions = vec![Edition::new(vec![], "2. Auflage")];

    assert!(comparator.compare(&a, &b).editions > 0.9);
}
