//! Brief record model
//!
//! A brief record is the field-level projection of a catalog entry that the
//! scorers compare. Records are built upstream (e.g. from MARC XML); this
//! crate only reads them. Every field may be empty, and emptiness is
//! meaningful to the missing-value policy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One edition statement with the numbers already extracted upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edition {
    #[serde(alias = "nb")]
    pub numbers: Vec<u32>,
    #[serde(alias = "txt")]
    pub text: String,
}

impl Edition {
    pub fn new(numbers: Vec<u32>, text: impl Into<String>) -> Self {
        Self {
            numbers,
            text: text.into(),
        }
    }
}

/// Physical extent: the numbers found in the extent statement and its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extent {
    #[serde(alias = "nb")]
    pub numbers: Vec<u32>,
    #[serde(alias = "txt")]
    pub text: String,
}

impl Extent {
    pub fn new(numbers: Vec<u32>, text: impl Into<String>) -> Self {
        Self {
            numbers,
            text: text.into(),
        }
    }
}

/// Publication years: candidate start years and an optional end year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Years {
    pub y1: Vec<i32>,
    pub y2: Option<i32>,
}

impl Years {
    pub fn new(y1: Vec<i32>, y2: Option<i32>) -> Self {
        Self { y1, y2 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefRecord {
    pub format: String,
    /// Language codes, primary language first
    pub languages: Vec<String>,
    pub publishers: Vec<String>,
    pub editions: Vec<Edition>,
    pub extent: Extent,
    pub years: Years,
    pub std_nums: BTreeSet<String>,
    pub sys_nums: BTreeSet<String>,
}

impl BriefRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
