use crate::extent::extent_score;
use crate::extent::music::notated_music_score;
use crate::policy::MissingValuePolicy;
use crate::record::Extent;

/// Similarity of two physical extents.
///
/// With `notated_music` set, the material kinds named in the extent texts
/// (score, parts, vocal score...) must agree as well.
pub fn evaluate_extent(
    extent1: &Extent,
    extent2: &Extent,
    notated_music: bool,
    policy: &MissingValuePolicy,
) -> f64 {
    policy.score(Some(extent1), Some(extent2), |a, b| {
        let raw = extent_score(&a.numbers, &b.numbers);
        if notated_music {
            notated_music_score(&a.text, &b.text, raw)
        } else {
            raw
        }
    })
}
