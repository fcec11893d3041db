use crate::policy::MissingValuePolicy;
use crate::text::{text_similarity, to_ascii};

/// Similarity of two format descriptions ("Book / Printed").
pub fn evaluate_format(format1: &str, format2: &str, policy: &MissingValuePolicy) -> f64 {
    policy.score(Some(format1), Some(format2), |a, b| {
        text_similarity(&to_ascii(a), &to_ascii(b))
    })
}

pub fn is_notated_music(format: &str) -> bool {
    to_ascii(format).contains("NOTATED MUSIC")
}
