//! Operation parameters
//!
//! Identifying parameters are `Option` so that absence can be reported as
//! a missing-parameter error by the service rather than rejected earlier.

use serde::{Deserialize, Serialize};

/// Parameters for raw indicator data retrieval
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthDataQuery {
    /// Indicator code (required)
    pub indicator_code: Option<String>,
    /// Raw `$filter` expression
    pub filter: Option<String>,
    /// `$top`
    pub limit: Option<u32>,
    /// `$orderby`
    pub order_by: Option<String>,
}

/// Parameters for per-country retrieval
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryDataQuery {
    /// Indicator code (required)
    pub indicator_code: Option<String>,
    /// Spatial code (e.g. `USA`)
    pub country_code: Option<String>,
    /// Year or `from:to` range
    pub year: Option<String>,
    /// Sex code (e.g. `SEX_FMLE`)
    pub sex: Option<String>,
    /// `$top`
    pub limit: Option<u32>,
}

/// Parameters for cross table retrieval
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrossTableQuery {
    /// Indicator code (required)
    pub indicator_code: Option<String>,
    /// Comma separated spatial codes
    pub countries: Option<String>,
    /// Year or `from:to` range
    pub years: Option<String>,
    /// Sex code
    pub sex: Option<String>,
    /// `$top`, defaults to [`crate::constants::CROSS_TABLE_DEFAULT_LIMIT`]
    pub limit: Option<u32>,
}
