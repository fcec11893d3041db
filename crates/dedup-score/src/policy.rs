//! Missing-value and multi-value policies shared by every field scorer
//!
//! A field scorer is composed as
//! `best_pairing(values1, values2, |a, b| policy.score(a, b, compare))`:
//! the multi-value wrapper keeps the best pair of the cross product, the
//! missing-value policy handles empty operands and rescales raw scores, and
//! `compare` only ever sees two non-empty values.

use std::collections::BTreeSet;

use crate::config::{ScoringConfig, DEFAULT_SCORE};
use crate::error::{Error, Result};
use crate::record::{Edition, Extent, Years};

/// Whether a value carries no information for comparison
pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for i32 {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl Emptiness for Edition {
    fn is_empty_value(&self) -> bool {
        self.text.is_empty_value()
    }
}

impl Emptiness for Extent {
    fn is_empty_value(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl Emptiness for Years {
    fn is_empty_value(&self) -> bool {
        self.y1.is_empty()
    }
}

/// Turns absent values into fixed scores and lifts raw scores above a floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissingValuePolicy {
    default_score: f64,
}

impl Default for MissingValuePolicy {
    fn default() -> Self {
        Self {
            default_score: DEFAULT_SCORE,
        }
    }
}

impl MissingValuePolicy {
    pub fn new(default_score: f64) -> Result<Self> {
        if !default_score.is_finite() || !(0.0..1.0).contains(&default_score) {
            return Err(Error::InvalidDefaultScore(default_score));
        }
        Ok(Self { default_score })
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        Self::new(config.default_score)
    }

    pub fn default_score(&self) -> f64 {
        self.default_score
    }

    /// Score for one absent side
    pub fn one_missing_score(&self) -> f64 {
        self.default_score / 2.0
    }

    /// Map a raw `[0, 1]` score into `[default, 1]`.
    pub fn rescale(&self, raw: f64) -> f64 {
        raw.clamp(0.0, 1.0) * (1.0 - self.default_score) + self.default_score
    }

    /// Score used when at least one side is empty, `None` when both have values.
    pub fn missing_score(&self, empty1: bool, empty2: bool) -> Option<f64> {
        match (empty1, empty2) {
            (true, true) => Some(0.0),
            (true, false) | (false, true) => Some(self.one_missing_score()),
            (false, false) => None,
        }
    }

    /// Apply the policy around a raw comparator.
    ///
    /// Both empty: 0.0. One empty: half the default. Otherwise the raw
    /// comparison rescaled into `[default, 1]`.
    pub fn score<T, F>(&self, value1: Option<&T>, value2: Option<&T>, compare: F) -> f64
    where
        T: Emptiness + ?Sized,
        F: FnOnce(&T, &T) -> f64,
    {
        let value1 = value1.filter(|v| !v.is_empty_value());
        let value2 = value2.filter(|v| !v.is_empty_value());

        match (value1, value2) {
            (Some(a), Some(b)) => self.rescale(compare(a, b)),
            (None, None) => 0.0,
            _ => self.one_missing_score(),
        }
    }
}

/// Best score over every pairing of two value lists.
///
/// An empty list takes part as a single absent value, so that the
/// missing-value policy still sees it.
pub fn best_pairing<T, F>(values1: &[T], values2: &[T], mut score: F) -> f64
where
    F: FnMut(Option<&T>, Option<&T>) -> f64,
{
    let slots1 = slots(values1);
    let slots2 = slots(values2);

    let mut best = 0.0;
    for a in &slots1 {
        for b in &slots2 {
            let current = score(*a, *b);
            if current > best {
                best = current;
            }
        }
    }
    best
}

fn slots<T>(values: &[T]) -> Vec<Option<&T>> {
    if values.is_empty() {
        vec![None]
    } else {
        values.iter().map(Some).collect()
    }
}
