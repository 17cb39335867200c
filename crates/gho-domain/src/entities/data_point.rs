//! Data point entity
//!
//! One observed fact: an indicator's value at a given place and time, with
//! up to three auxiliary classification dimensions.

use serde::{Deserialize, Serialize};

/// A single observation
///
/// ## Defaults
///
/// - Text fields (`indicator`, `value`, `display_value`, `time_dim_begin`,
///   `time_dim_end`, `comments`) default to `""`.
/// - Linkage fields (`spatial_dim`, `time_dim`, `dim1`..`dim3`,
///   `data_source_code`, the dimension types) default to `None`.
/// - `numeric_value`, `low` and `high` are `None` unless the upstream record
///   carries a number. `numeric_value` is never reconciled with `value`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    /// Indicator code the observation belongs to
    pub indicator: String,
    /// Textual value as published
    pub value: String,
    /// Numeric value, when published separately
    pub numeric_value: Option<f64>,
    /// Display value (same source as `value`)
    pub display_value: String,
    /// Lower confidence bound
    pub low: Option<f64>,
    /// Upper confidence bound
    pub high: Option<f64>,
    /// Spatial dimension type (e.g. `COUNTRY`, `REGION`)
    pub spatial_dim_type: Option<String>,
    /// Spatial code (e.g. `USA`)
    pub spatial_dim: Option<String>,
    /// Time dimension type (e.g. `YEAR`)
    pub time_dim_type: Option<String>,
    /// Year of the observation
    pub time_dim: Option<i32>,
    /// Start of the observed period
    pub time_dim_begin: String,
    /// End of the observed period
    pub time_dim_end: String,
    /// First auxiliary dimension (usually sex)
    pub dim1: Option<String>,
    /// Second auxiliary dimension
    pub dim2: Option<String>,
    /// Third auxiliary dimension
    pub dim3: Option<String>,
    /// Comments attached by the publisher
    pub comments: String,
    /// Data source code
    pub data_source_code: Option<String>,
}
