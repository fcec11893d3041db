//! Edition statements: number dictionary and normalization

mod dictionary;
mod normalize;

pub use dictionary::EditionDictionary;
pub use normalize::{compare_edition_numbers, normalize_edition, NormalizedEdition};
