//! Text primitives shared by the field scorers

pub mod align;
pub mod normalize;

pub use align::{indel_ratio, length_penalty, text_similarity, tokenize};
pub use normalize::{solve_abbreviations, strip_special_chars, to_ascii};
