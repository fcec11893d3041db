//! Error types for scorer construction and record loading

use thiserror::Error;

/// Errors raised while building a comparator or loading its inputs.
///
/// Scoring itself is total: once a [`crate::RecordComparator`] exists, every
/// comparison returns a score.
#[derive(Debug, Error)]
pub enum Error {
    #[error("default score must be in [0, 1), got {0}")]
    InvalidDefaultScore(f64),

    #[error("invalid edition dictionary: {0}")]
    Dictionary(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
