//! Record model: one cleaned observation plus its derived classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Line of business, derived from the campaign dimension by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lob {
    Mdcr,
    Csbd,
    Mdcd,
    Other,
}

impl Lob {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lob::Mdcr => "MDCR",
            Lob::Csbd => "CSBD",
            Lob::Mdcd => "MDCD",
            Lob::Other => "OTHER",
        }
    }
}

impl fmt::Display for Lob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buying platform, a fixed function of the LOB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Yahoo,
    #[serde(rename = "TTD")]
    Ttd,
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Yahoo => "Yahoo",
            Platform::Ttd => "TTD",
            Platform::Other => "Other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cleaned row. Dimensions are forward-filled; an empty string means the
/// column had no preceding non-blank value, which is tolerated rather than
/// treated as an error. Metrics are coerced, with negatives retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub dim_a: String,
    pub dim_b: String,
    pub campaign: String,
    pub impressions: f64,
    pub clicks: f64,
    pub spend: f64,
    pub conversions: f64,
    pub lob: Lob,
    pub platform: Platform,
}
