//! Dimension entities
//!
//! A dimension is a named axis of classification in the dataset (country,
//! region, year, sex). Each dimension holds a set of codes.

use serde::{Deserialize, Serialize};

/// A named axis of classification
///
/// Produced only by the dimensions listing. Every field defaults to an
/// empty string when the upstream record omits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dimension {
    /// Dimension code (e.g. `COUNTRY`, `SEX`)
    pub code: String,
    /// Human readable title
    pub title: String,
    /// Free text description
    pub description: String,
}

/// A single value within a named dimension
///
/// Codes may be hierarchical: `parent_code` links to another code in the
/// same or a coarser dimension. Cycles are neither expected nor checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionCode {
    /// Code value (e.g. `USA`)
    pub code: String,
    /// Human readable title
    pub title: String,
    /// Free text description
    pub description: String,
    /// Dimension this code belongs to, when the upstream reports it
    pub dimension: Option<String>,
    /// Parent code in the hierarchy
    pub parent_code: Option<String>,
    /// Dimension of the parent code
    pub parent_dimension: Option<String>,
}
