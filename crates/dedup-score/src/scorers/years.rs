use crate::policy::{best_pairing, Emptiness, MissingValuePolicy};
use crate::record::Years;

/// Scale applied to the year gap before the bell-shaped decay
const YEAR_GAP_SCALE: f64 = 0.5;

/// Weight of the start year against the end year
const START_YEAR_WEIGHT: f64 = 3.0;

/// Discount when only one record has an end year
const ONE_END_YEAR_DISCOUNT: f64 = 0.9;

/// Raw year similarity: `1 / ((|y1 - y2| * 0.5)² + 1)`
pub fn year_similarity(year1: i32, year2: i32) -> f64 {
    let gap = (year1 as f64 - year2 as f64).abs() * YEAR_GAP_SCALE;
    1.0 / (gap * gap + 1.0)
}

pub fn evaluate_years(year1: i32, year2: i32, policy: &MissingValuePolicy) -> f64 {
    policy.score(Some(&year1), Some(&year2), |a, b| year_similarity(*a, *b))
}

/// Compare start years (best pair) and, when available, end years.
///
/// Both end years present: weighted 3:1 in favour of the start years. Only
/// one end year: the start score discounted by 10%. No end year: the start
/// score alone.
pub fn evaluate_years_start_and_end(
    years1: &Years,
    years2: &Years,
    policy: &MissingValuePolicy,
) -> f64 {
    if let Some(score) = policy.missing_score(years1.is_empty_value(), years2.is_empty_value()) {
        return score;
    }

    let start = best_pairing(&years1.y1, &years2.y1, |a, b| {
        policy.score(a, b, |a, b| year_similarity(*a, *b))
    });

    match (years1.y2, years2.y2) {
        (Some(end1), Some(end2)) => {
            let end = evaluate_years(end1, end2, policy);
            (start * START_YEAR_WEIGHT + end) / (START_YEAR_WEIGHT + 1.0)
        }
        (None, None) => start,
        _ => start * ONE_END_YEAR_DISCOUNT,
    }
}
