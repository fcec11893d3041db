//! dedup-score: field similarity scoring for brief bibliographic records.
//!
//! Compares two brief records (a reduced, field-level projection of a catalog
//! entry) and produces one score per field:
//! - format, languages, publishers, editions
//! - extent (page and part counts)
//! - years (start and end year)
//! - standard numbers and system numbers
//!
//! Every score is a float in `[0, 1]`. The crate never decides whether two
//! records are duplicates; it only produces the score vector consumed by a
//! downstream decision step.
//!
//! # Example
//!
//! ```
//! use dedup_score::{BriefRecord, RecordComparator, ScoringConfig};
//!
//! let comparator = RecordComparator::new(ScoringConfig::default()).unwrap();
//!
//! let mut a = BriefRecord::default();
//! a.publishers = vec!["Springer".to_string()];
//! let mut b = BriefRecord::default();
//! b.publishers = vec!["Springer".to_string()];
//!
//! let scores = comparator.compare(&a, &b);
//! assert!(scores.publishers > 0.9);
//! assert_eq!(scores.format, 0.0);
//! ```

pub mod config;
pub mod editions;
pub mod error;
pub mod extent;
pub mod policy;
pub mod record;
pub mod scorers;
pub mod similarity;
pub mod text;

pub use config::ScoringConfig;
pub use editions::{EditionDictionary, NormalizedEdition};
pub use error::{Error, Result};
pub use policy::{best_pairing, Emptiness, MissingValuePolicy};
pub use record::{BriefRecord, Edition, Extent, Years};
pub use similarity::{evaluate_records, Field, RecordComparator, SimilarityScores};
