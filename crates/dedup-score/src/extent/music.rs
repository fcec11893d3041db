//! Material kinds named in notated music extents
//!
//! For printed music the extent names what was published ("1 partition",
//! "1 Klavierauszug", "Aufführungsmaterial"). Two records naming different
//! materials describe different publications even when page counts agree.

use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

use crate::text::{strip_special_chars, to_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MusicMaterial {
    /// Full score
    Score,
    /// Study or pocket score
    StudyScore,
    /// Vocal score or piano reduction
    VocalScore,
    /// Performance parts
    Parts,
}

const KEYWORDS: &[(&str, MusicMaterial)] = &[
    ("PARTITUR", MusicMaterial::Score),
    ("PARTITION", MusicMaterial::Score),
    ("PARTITURA", MusicMaterial::Score),
    ("SCORE", MusicMaterial::Score),
    ("FULL SCORE", MusicMaterial::Score),
    ("TASCHENPARTITUR", MusicMaterial::StudyScore),
    ("STUDIENPARTITUR", MusicMaterial::StudyScore),
    ("PARTITION DE POCHE", MusicMaterial::StudyScore),
    ("PARTITURA TASCABILE", MusicMaterial::StudyScore),
    ("MINIATURE SCORE", MusicMaterial::StudyScore),
    ("STUDY SCORE", MusicMaterial::StudyScore),
    ("POCKET SCORE", MusicMaterial::StudyScore),
    ("KLAVIERAUSZUG", MusicMaterial::VocalScore),
    ("REDUCTION", MusicMaterial::VocalScore),
    ("RIDUZIONE", MusicMaterial::VocalScore),
    ("VOCAL SCORE", MusicMaterial::VocalScore),
    ("PIANO SCORE", MusicMaterial::VocalScore),
    ("AUFFUHRUNGSMATERIAL", MusicMaterial::Parts),
    ("ORCHESTERMATERIAL", MusicMaterial::Parts),
    ("MATERIEL", MusicMaterial::Parts),
    ("STIMMEN", MusicMaterial::Parts),
    ("PARTIES", MusicMaterial::Parts),
    ("PARTS", MusicMaterial::Parts),
    ("PARTI", MusicMaterial::Parts),
];

lazy_static! {
    static ref KEYWORD_KINDS: HashMap<&'static str, MusicMaterial> =
        KEYWORDS.iter().copied().collect();

    // Longest keyword first: "PARTITION DE POCHE" must win over "PARTITION"
    static ref KEYWORD_REGEX: Regex = {
        let mut keywords: Vec<&str> = KEYWORDS.iter().map(|(k, _)| *k).collect();
        keywords.sort_by(|a, b| b.len().cmp(&a.len()));
        Regex::new(&format!(r"\b(?:{})\b", keywords.join("|"))).unwrap()
    };
}

/// Material kinds named in an extent statement
pub fn detect_materials(text: &str) -> BTreeSet<MusicMaterial> {
    let normalized = strip_special_chars(&to_ascii(text), false);
    KEYWORD_REGEX
        .find_iter(&normalized)
        .filter_map(|m| KEYWORD_KINDS.get(m.as_str()).copied())
        .collect()
}

/// Share of the remaining doubt removed by each agreeing material kind
const MATERIAL_EVIDENCE: f64 = 0.5;

/// Adjust a raw extent score for notated music.
///
/// Unchanged when either side names no material; 0 when both name
/// materials and they differ. When they agree, the page score is softened
/// to its square root, and never falls below the evidence of the agreeing
/// kinds themselves (0.5 for one kind, 0.75 for two...).
pub fn notated_music_score(text1: &str, text2: &str, score: f64) -> f64 {
    let materials1 = detect_materials(text1);
    let materials2 = detect_materials(text2);

    if materials1.is_empty() || materials2.is_empty() {
        score
    } else if materials1 != materials2 {
        0.0
    } else {
        score.sqrt().max(material_agreement(materials1.len()))
    }
}

fn material_agreement(kinds: usize) -> f64 {
    1.0 - (1.0 - MATERIAL_EVIDENCE).powi(kinds as i32)
}
