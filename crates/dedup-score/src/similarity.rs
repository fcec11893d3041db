//! Record similarity aggregation
//!
//! Runs every field scorer on a pair of brief records and assembles the
//! per-field score vector consumed by the duplicate-decision step.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::editions::EditionDictionary;
use crate::error::Result;
use crate::policy::MissingValuePolicy;
use crate::record::BriefRecord;
use crate::scorers::{
    evaluate_editions, evaluate_extent, evaluate_format, evaluate_identifiers, evaluate_languages,
    evaluate_publishers, evaluate_years_start_and_end, is_notated_music,
};

/// A field of the score vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Format,
    Languages,
    Publishers,
    Editions,
    Extent,
    Years,
    StdNums,
    SysNums,
}

impl Field {
    /// Every field, in score vector order
    pub const ALL: [Field; 8] = [
        Field::Format,
        Field::Languages,
        Field::Publishers,
        Field::Editions,
        Field::Extent,
        Field::Years,
        Field::StdNums,
        Field::SysNums,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Format => "format",
            Field::Languages => "languages",
            Field::Publishers => "publishers",
            Field::Editions => "editions",
            Field::Extent => "extent",
            Field::Years => "years",
            Field::StdNums => "std_nums",
            Field::SysNums => "sys_nums",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One score in `[0, 1]` per field. Serializes as a JSON object with the
/// fields in [`Field::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    pub format: f64,
    pub languages: f64,
    pub publishers: f64,
    pub editions: f64,
    pub extent: f64,
    pub years: f64,
    pub std_nums: f64,
    pub sys_nums: f64,
}

impl SimilarityScores {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Format => self.format,
            Field::Languages => self.languages,
            Field::Publishers => self.publishers,
            Field::Editions => self.editions,
            Field::Extent => self.extent,
            Field::Years => self.years,
            Field::StdNums => self.std_nums,
            Field::SysNums => self.sys_nums,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// Compares brief records field by field.
///
/// Holds the missing-value policy and a shared edition dictionary; a single
/// comparator can be used for any number of comparisons, from any thread.
#[derive(Debug, Clone)]
pub struct RecordComparator {
    policy: MissingValuePolicy,
    dictionary: Arc<EditionDictionary>,
}

impl Default for RecordComparator {
    fn default() -> Self {
        Self {
            policy: MissingValuePolicy::default(),
            dictionary: EditionDictionary::shared(),
        }
    }
}

impl RecordComparator {
    /// Comparator using the embedded edition dictionary.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        Self::with_dictionary(config, EditionDictionary::shared())
    }

    pub fn with_dictionary(config: ScoringConfig, dictionary: Arc<EditionDictionary>) -> Result<Self> {
        let policy = MissingValuePolicy::from_config(&config)?;
        Ok(Self { policy, dictionary })
    }

    pub fn policy(&self) -> &MissingValuePolicy {
        &self.policy
    }

    pub fn dictionary(&self) -> &EditionDictionary {
        &self.dictionary
    }

    pub fn compare(&self, record1: &BriefRecord, record2: &BriefRecord) -> SimilarityScores {
        let notated_music = is_notated_music(&record1.format) && is_notated_music(&record2.format);

        let scores = SimilarityScores {
            format: evaluate_format(&record1.format, &record2.format, &self.policy),
            languages: evaluate_languages(&record1.languages, &record2.languages, &self.policy),
            publishers: evaluate_publishers(&record1.publishers, &record2.publishers, &self.policy),
            editions: evaluate_editions(
                &record1.editions,
                &record2.editions,
                &self.policy,
                &self.dictionary,
            ),
            extent: evaluate_extent(&record1.extent, &record2.extent, notated_music, &self.policy),
            years: evaluate_years_start_and_end(&record1.years, &record2.years, &self.policy),
            std_nums: evaluate_identifiers(&record1.std_nums, &record2.std_nums, &self.policy),
            sys_nums: evaluate_identifiers(&record1.sys_nums, &record2.sys_nums, &self.policy),
        };

        tracing::trace!(
            format = scores.format,
            languages = scores.languages,
            publishers = scores.publishers,
            editions = scores.editions,
            extent = scores.extent,
            years = scores.years,
            std_nums = scores.std_nums,
            sys_nums = scores.sys_nums,
            notated_music,
            "compared brief records"
        );

        scores
    }
}

/// Compare two records with the default configuration and dictionary.
pub fn evaluate_records(record1: &BriefRecord, record2: &BriefRecord) -> SimilarityScores {
    RecordComparator::default().compare(record1, record2)
}
