//! Per-operation record projections
//!
//! Upstream field names are those of the GHO OData service. None of these
//! functions can fail: missing fields fall back to the defaults documented
//! on the target entity.

use gho_domain::entities::{DataPoint, Dimension, DimensionCode, Indicator};
use serde_json::Value;

use super::record::{Record, records};

/// Project every record of `payload` with `project`
pub fn project_all<T>(payload: &Value, project: fn(&Value) -> T) -> Vec<T> {
    records(payload).iter().map(project).collect()
}

/// Record → [`Dimension`]
pub fn dimension(value: &Value) -> Dimension {
    let record = Record::new(value);
    Dimension {
        code: record.text("Code"),
        title: record.text("Title"),
        description: record.text("Description"),
    }
}

/// Record → [`DimensionCode`]
pub fn dimension_code(value: &Value) -> DimensionCode {
    let record = Record::new(value);
    DimensionCode {
        code: record.text("Code"),
        title: record.text("Title"),
        description: record.text("Description"),
        dimension: record.linked("Dimension"),
        parent_code: record.linked("ParentCode"),
        parent_dimension: record.linked("ParentDimension"),
    }
}

/// Record → [`Indicator`]
pub fn indicator(value: &Value) -> Indicator {
    let record = Record::new(value);
    Indicator {
        code: record.text("IndicatorCode"),
        name: record.text("IndicatorName"),
        category: record.text("Category"),
        definition: record.text("Definition"),
        method: record.text("Method"),
        interpretation: record.text("Interpretation"),
        language: record.text("Language"),
    }
}

/// Record → [`DataPoint`]
///
/// `value` and `display_value` both come from the textual `Value` field;
/// `numeric_value` comes from `NumericValue` only.
pub fn data_point(value: &Value) -> DataPoint {
    let record = Record::new(value);
    let text_value = record.text("Value");
    DataPoint {
        indicator: record.text("IndicatorCode"),
        display_value: text_value.clone(),
        value: text_value,
        numeric_value: record.number("NumericValue"),
        low: record.number("Low"),
        high: record.number("High"),
        spatial_dim_type: record.linked("SpatialDimType"),
        spatial_dim: record.linked("SpatialDim"),
        time_dim_type: record.linked("TimeDimType"),
        time_dim: record.year("TimeDim"),
        time_dim_begin: record.text("TimeDimensionBegin"),
        time_dim_end: record.text("TimeDimensionEnd"),
        dim1: record.linked("Dim1"),
        dim2: record.linked("Dim2"),
        dim3: record.linked("Dim3"),
        comments: record.text("Comments"),
        data_source_code: record.linked("DataSourceDim"),
    }
}
