//! Tool argument types for the MCP server
//!
//! Every tool takes a flat JSON object. Required identifiers are optional
//! here on purpose: a missing one reaches the service, which reports it as
//! a missing parameter in the tool result.

use gho_domain::value_objects::{CountryDataQuery, CrossTableQuery, HealthDataQuery, YearSpec};
use schemars::JsonSchema;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Arguments for the list_dimensions tool
#[derive(Debug, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "No parameters")]
pub struct ListDimensionsArgs {}

/// Arguments for the list_dimension_codes tool
#[derive(Debug, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for listing the values of one dimension")]
pub struct ListDimensionCodesArgs {
    /// Dimension to list
    #[validate(custom(function = "validate_code", message = "Invalid dimension code"))]
    #[schemars(description = "Dimension code as returned by list_dimensions (e.g. 'COUNTRY', 'SEX')")]
    pub dimension_code: Option<String>,
}

/// Arguments for the search_indicators tool
#[derive(Debug, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for searching indicators by name")]
pub struct SearchIndicatorsArgs {
    /// Text to look for in indicator names
    #[validate(length(max = 2000, message = "Keywords must be at most 2000 characters"))]
    #[schemars(description = "Text contained in the indicator name (e.g. 'life expectancy')")]
    pub keywords: Option<String>,
}

/// Arguments for the get_health_data tool
#[derive(Debug, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for fetching observations with raw OData options")]
pub struct HealthDataArgs {
    /// Indicator to fetch
    #[validate(custom(function = "validate_code", message = "Invalid indicator code"))]
    #[schemars(description = "Indicator code (e.g. 'WHOSIS_000001')")]
    pub indicator_code: Option<String>,

    /// Raw `$filter` expression
    #[validate(length(max = 2000, message = "Filter must be at most 2000 characters"))]
    #[schemars(description = "OData $filter expression (e.g. \"SpatialDim eq 'USA'\")")]
    pub filter: Option<String>,

    /// Maximum number of records
    #[validate(range(min = 1, max = 10000, message = "Limit must be between 1 and 10000"))]
    #[schemars(description = "Maximum number of records to return")]
    pub limit: Option<u32>,

    /// Raw `$orderby` expression
    #[validate(length(max = 2000, message = "Order by must be at most 2000 characters"))]
    #[schemars(description = "OData $orderby expression (e.g. 'TimeDim desc')")]
    pub order_by: Option<String>,
}

/// Arguments for the get_country_data tool
#[derive(Debug, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for fetching observations for one country")]
pub struct CountryDataArgs {
    /// Indicator to fetch
    #[validate(custom(function = "validate_code", message = "Invalid indicator code"))]
    #[schemars(description = "Indicator code (e.g. 'WHOSIS_000001')")]
    pub indicator_code: Option<String>,

    /// Country to restrict to
    #[validate(custom(function = "validate_code", message = "Invalid country code"))]
    #[schemars(description = "ISO 3166-1 alpha-3 country code (e.g. 'USA')")]
    pub country_code: Option<String>,

    /// Year or year range
    #[validate(custom(function = "validate_year", message = "Year must be YYYY or YYYY:YYYY"))]
    #[schemars(description = "Single year ('2020') or inclusive range ('2015:2020')")]
    pub year: Option<String>,

    /// Sex dimension value
    #[validate(custom(function = "validate_code", message = "Invalid sex code"))]
    #[schemars(description = "Sex code ('MLE', 'FMLE' or 'BTSX')")]
    pub sex: Option<String>,

    /// Maximum number of records
    #[validate(range(min = 1, max = 10000, message = "Limit must be between 1 and 10000"))]
    #[schemars(description = "Maximum number of records to return")]
    pub limit: Option<u32>,
}

/// Arguments for the get_cross_table tool
#[derive(Debug, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for building a multi-country, multi-year table")]
pub struct CrossTableArgs {
    /// Indicator to fetch
    #[validate(custom(function = "validate_code", message = "Invalid indicator code"))]
    #[schemars(description = "Indicator code (e.g. 'WHOSIS_000001')")]
    pub indicator_code: Option<String>,

    /// Comma separated country codes
    #[validate(custom(function = "validate_code_list", message = "Invalid country list"))]
    #[schemars(description = "Comma separated country codes (e.g. 'USA,FRA,DEU')")]
    pub countries: Option<String>,

    /// Year or year range
    #[validate(custom(function = "validate_year", message = "Years must be YYYY or YYYY:YYYY"))]
    #[schemars(description = "Single year ('2020') or inclusive range ('2015:2020')")]
    pub years: Option<String>,

    /// Sex dimension value
    #[validate(custom(function = "validate_code", message = "Invalid sex code"))]
    #[schemars(description = "Sex code ('MLE', 'FMLE' or 'BTSX')")]
    pub sex: Option<String>,

    /// Maximum number of records (default 1000)
    #[validate(range(min = 1, max = 10000, message = "Limit must be between 1 and 10000"))]
    #[schemars(description = "Maximum number of records to return (default 1000)")]
    pub limit: Option<u32>,
}

impl From<HealthDataArgs> for HealthDataQuery {
    fn from(args: HealthDataArgs) -> Self {
        Self {
            indicator_code: args.indicator_code,
            filter: args.filter,
            limit: args.limit,
            order_by: args.order_by,
        }
    }
}

impl From<CountryDataArgs> for CountryDataQuery {
    fn from(args: CountryDataArgs) -> Self {
        Self {
            indicator_code: args.indicator_code,
            country_code: args.country_code,
            year: args.year,
            sex: args.sex,
            limit: args.limit,
        }
    }
}

impl From<CrossTableArgs> for CrossTableQuery {
    fn from(args: CrossTableArgs) -> Self {
        Self {
            indicator_code: args.indicator_code,
            countries: args.countries,
            years: args.years,
            sex: args.sex,
            limit: args.limit,
        }
    }
}

// Custom validation functions

fn is_token(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Blank values pass: they are reported by the service as missing
fn validate_code(code: &str) -> Result<(), ValidationError> {
    let code = code.trim();
    if code.is_empty() || is_token(code) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_code"))
    }
}

fn validate_code_list(list: &str) -> Result<(), ValidationError> {
    if list.split(',').map(str::trim).all(is_token) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_code_list"))
    }
}

fn is_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

fn validate_year(year: &str) -> Result<(), ValidationError> {
    let valid = match YearSpec::parse(year) {
        None => true,
        Some(YearSpec::Single(y)) => is_year(&y),
        Some(YearSpec::Range { from, to }) => is_year(&from) && is_year(&to),
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_year"))
    }
}
