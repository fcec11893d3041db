//! Multilingual dictionary of edition number expressions
//!
//! Maps normalized ordinal and cardinal expressions ("DEUXIEME", "DIX
//! SEPTIEME", "SEC.", "II.") to their integer value. The default dictionary
//! is built once from the embedded `data/edition_numbers.json` asset and
//! shared read-only through an `Arc`.

use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::text::{strip_special_chars, to_ascii};

const EDITION_NUMBERS_JSON: &str = include_str!("../../data/edition_numbers.json");

lazy_static! {
    static ref DEFAULT_DICTIONARY: Arc<EditionDictionary> = Arc::new(
        EditionDictionary::from_json(EDITION_NUMBERS_JSON)
            .expect("embedded edition dictionary is valid")
    );
}

/// Words announcing an edition, after which a one-letter Roman numeral is
/// read as a number
const EDITION_WORDS: &[&str] = &[
    "EDITION", "EDITIONS", "EDICION", "EDICAO", "EDIZIONE", "EDITIE", "ED", "AUFLAGE", "AUFL",
    "AUSGABE", "AUSG", "DRUCK", "IMPRESSION", "IMPR", "TIRAGE", "UITGAVE", "DRUK",
];

/// `I.`, `V.`, `X.`
fn is_single_letter(expression: &str) -> bool {
    let mut chars = expression.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_alphabetic()
    )
}

#[derive(Debug)]
struct DictionaryEntry {
    expression: String,
    value: u32,
    pattern: Regex,
    replacement: String,
}

impl DictionaryEntry {
    fn new(expression: String, value: u32) -> Result<Self> {
        let ends_with_word_char = expression
            .chars()
            .last()
            .map(|c| c.is_alphanumeric() || c == '_')
            .unwrap_or(false);
        let escaped = regex::escape(&expression);

        // `\b` cannot close an expression ending in a dot, so the following
        // non-word character is captured and written back.
        let (pattern, replacement) = if ends_with_word_char {
            (format!(r"\b{}\b", escaped), value.to_string())
        } else if is_single_letter(&expression) {
            // "V." is as often "von" as it is a Roman five: only at the start
            // of the statement or right before an edition word
            (
                format!(
                    r"^{escaped}(?P<tail>\W|$)|\b{escaped}(?P<word>\s*(?:{words})\b)",
                    escaped = escaped,
                    words = EDITION_WORDS.join("|"),
                ),
                format!("{}${{tail}}${{word}}", value),
            )
        } else {
            (
                format!(r"\b{}(?P<tail>\W|$)", escaped),
                format!("{}${{tail}}", value),
            )
        };

        let pattern = Regex::new(&pattern)
            .map_err(|e| Error::Dictionary(format!("expression {:?}: {}", expression, e)))?;

        Ok(Self {
            expression,
            value,
            pattern,
            replacement,
        })
    }
}

/// Immutable expression → number mapping, applied longest expression first.
#[derive(Debug)]
pub struct EditionDictionary {
    entries: Vec<DictionaryEntry>,
}

impl EditionDictionary {
    /// The dictionary built from the embedded multilingual asset.
    pub fn shared() -> Arc<EditionDictionary> {
        Arc::clone(&DEFAULT_DICTIONARY)
    }

    /// Load a dictionary from a JSON object of `expression: number` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, u32> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Build a dictionary from expression/number pairs.
    ///
    /// Expressions are normalized the same way edition statements are
    /// (ASCII upper case, special characters except dots removed).
    /// Expressions left empty are skipped; a later duplicate wins.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut normalized: BTreeMap<String, u32> = BTreeMap::new();
        for (expression, value) in entries {
            let expression = strip_special_chars(&to_ascii(expression.as_ref()), true);
            if expression.is_empty() {
                continue;
            }
            normalized.insert(expression, value);
        }

        if normalized.is_empty() {
            return Err(Error::Dictionary("no expressions".to_string()));
        }

        let mut entries = normalized
            .into_iter()
            .map(|(expression, value)| DictionaryEntry::new(expression, value))
            .collect::<Result<Vec<_>>>()?;

        // Longest first so that "SECONDE" is replaced before "SECOND"
        entries.sort_by(|a, b| {
            b.expression
                .len()
                .cmp(&a.expression.len())
                .then_with(|| a.expression.cmp(&b.expression))
        });

        tracing::debug!(entries = entries.len(), "loaded edition dictionary");

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number mapped to an already normalized expression
    pub fn get(&self, expression: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.expression == expression)
            .map(|entry| entry.value)
    }

    /// Expressions with their values, in application order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|entry| (entry.expression.as_str(), entry.value))
    }

    /// Replace every whole-word expression in `text` by its digits.
    pub fn substitute(&self, text: &str) -> String {
        let mut result = text.to_string();
        for entry in &self.entries {
            if entry.pattern.is_match(&result) {
                result = entry
                    .pattern
                    .replace_all(&result, entry.replacement.as_str())
                    .into_owned();
            }
        }
        result
    }
}
