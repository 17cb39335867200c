//! Indicator metadata entity

use serde::{Deserialize, Serialize};

/// Metadata describing a measurable quantity tracked over time and place
///
/// All fields default to an empty string; the upstream indicator listing
/// usually carries only the code, name and language.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Indicator {
    /// Indicator code used as the data endpoint path (e.g. `WHOSIS_000001`)
    pub code: String,
    /// Indicator name
    pub name: String,
    /// Thematic category
    pub category: String,
    /// Definition text
    pub definition: String,
    /// Method of estimation
    pub method: String,
    /// Guidance on interpretation
    pub interpretation: String,
    /// Language of the textual fields
    pub language: String,
}
