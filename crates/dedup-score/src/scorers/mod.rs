//! Field scorers
//!
//! Each scorer pairs a raw comparison of two non-empty values with the
//! policies from [`crate::policy`]. Multi-valued fields (publishers,
//! editions, start years) keep the best pair; every scorer returns a score
//! in `[0, 1]`.

mod editions;
mod extent;
mod format;
mod identifiers;
mod languages;
mod publishers;
mod years;

pub use editions::{edition_similarity, evaluate_editions};
pub use extent::evaluate_extent;
pub use format::{evaluate_format, is_notated_music};
pub use identifiers::{canonical_identifier, evaluate_identifiers, identifier_similarity};
pub use languages::{evaluate_languages, language_similarity};
pub use publishers::{evaluate_publishers, normalize_publisher, publisher_similarity};
pub use years::{evaluate_years, evaluate_years_start_and_end, year_similarity};
