//! Physical extent comparison
//!
//! Extents are compared as sets of numbers because a resource described in
//! parts ("15 p., 285 p.") may be described as a whole elsewhere ("300 p.").
//! Three measures are combined:
//! - strict magnitude-weighted set overlap
//! - the same overlap on decade-rounded values
//! - closeness of the totals

pub mod music;

use std::collections::BTreeSet;

/// Sensitivity of the totals comparison to relative difference
const SUM_DECAY: f64 = 6.0;

/// Values below this are never rounded
const ROUNDING_THRESHOLD: u32 = 20;

/// Round extent values so that small transcription differences still overlap.
///
/// Values below 20 are kept; larger ones map to their decade and to the
/// decade below it (`21 → {10, 20}`, `300 → {290, 300}`).
pub fn rounded_extent(values: &BTreeSet<u32>) -> BTreeSet<u32> {
    let mut rounded = BTreeSet::new();
    for &value in values {
        if value < ROUNDING_THRESHOLD {
            rounded.insert(value);
        } else {
            let decade = value - value % 10;
            rounded.insert(decade);
            rounded.insert(decade - 10);
        }
    }
    rounded
}

/// Magnitude-weighted overlap: `sum(A ∩ B)² / (sum(A) · sum(B))`.
///
/// Large matching values dominate: `{1, 180, 170}` against `{180, 170}`
/// scores above 0.99.
pub fn calc_with_sets(set1: &BTreeSet<u32>, set2: &BTreeSet<u32>) -> f64 {
    let sum1: u64 = set1.iter().map(|&v| v as u64).sum();
    let sum2: u64 = set2.iter().map(|&v| v as u64).sum();
    if sum1 == 0 || sum2 == 0 {
        return 0.0;
    }

    let common: u64 = set1.intersection(set2).map(|&v| v as u64).sum();
    let common = common as f64;
    common * common / (sum1 as f64 * sum2 as f64)
}

/// Closeness of the two totals, decaying with their relative difference.
pub fn calc_with_sum(values1: &[u32], values2: &[u32]) -> f64 {
    let sum1: u64 = values1.iter().map(|&v| v as u64).sum();
    let sum2: u64 = values2.iter().map(|&v| v as u64).sum();
    let largest = sum1.max(sum2);
    if largest == 0 {
        return 0.0;
    }

    let relative_diff = sum1.abs_diff(sum2) as f64 / largest as f64;
    (-SUM_DECAY * relative_diff).exp()
}

/// Combined extent similarity in `[0, 1]`.
///
/// The plain mean of the three measures, except when the totals agree very
/// closely on a sizeable extent while the sets do not: then the totals
/// comparison weighs ten times more.
pub fn extent_score(values1: &[u32], values2: &[u32]) -> f64 {
    let set1: BTreeSet<u32> = values1.iter().copied().collect();
    let set2: BTreeSet<u32> = values2.iter().copied().collect();

    let strict = calc_with_sets(&set1, &set2);
    let rounded = calc_with_sets(&rounded_extent(&set1), &rounded_extent(&set2));
    let sum = calc_with_sum(values1, values2);

    let total: u64 = values1.iter().chain(values2).map(|&v| v as u64).sum();

    if sum - strict > 0.5 && sum > 0.95 && total > 100 {
        (strict + rounded + sum * 10.0) / 12.0
    } else {
        (strict + rounded + sum) / 3.0
    }
}
