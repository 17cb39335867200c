//! Tests for payload projection and summaries

use gho_application::normalize::{
    data_point, dimension, dimension_code, indicator, project_all, summarize,
};
use gho_domain::DataPoint;
use serde_json::json;

#[test]
fn test_missing_value_key_yields_empty_list() {
    assert!(project_all(&json!({}), dimension).is_empty());
    assert!(project_all(&json!({ "value": "oops" }), dimension).is_empty());
    assert!(project_all(&json!(null), indicator).is_empty());
}

#[test]
fn test_dimensions_default_missing_text_to_empty() {
    let payload = json!({ "value": [{ "Code": "SEX", "Title": "Sex" }] });
    let dimensions = project_all(&payload, dimension);

    assert_eq!(dimensions.len(), 1);
    assert_eq!(dimensions[0].code, "SEX");
    assert_eq!(dimensions[0].title, "Sex");
    assert_eq!(dimensions[0].description, "");
}

#[test]
fn test_dimension_codes_keep_parent_linkage_nullable() {
    let payload = json!({ "value": [
        { "Code": "USA", "Title": "United States", "Dimension": "COUNTRY", "ParentCode": null },
        { "Code": "FRA", "Title": "France", "Dimension": "COUNTRY", "ParentCode": "EUR",
          "ParentDimension": "REGION" },
    ]});
    let codes = project_all(&payload, dimension_code);

    assert_eq!(codes[0].parent_code, None);
    assert_eq!(codes[0].parent_dimension, None);
    assert_eq!(codes[1].parent_code.as_deref(), Some("EUR"));
    assert_eq!(codes[1].dimension.as_deref(), Some("COUNTRY"));

    let serialized = serde_json::to_value(&codes[0]).unwrap();
    assert!(serialized["parent_code"].is_null());
}

#[test]
fn test_indicator_fields_are_mapped() {
    let value = json!({
        "IndicatorCode": "WHOSIS_000001",
        "IndicatorName": "Life expectancy at birth (years)",
        "Language": "EN"
    });
    let indicator = indicator(&value);

    assert_eq!(indicator.code, "WHOSIS_000001");
    assert_eq!(indicator.name, "Life expectancy at birth (years)");
    assert_eq!(indicator.language, "EN");
    assert_eq!(indicator.category, "");
}

#[test]
fn test_data_point_numeric_value_comes_only_from_numeric_field() {
    let point = data_point(&json!({ "IndicatorCode": "X", "Value": "12.3" }));

    assert_eq!(point.value, "12.3");
    assert_eq!(point.display_value, "12.3");
    assert_eq!(point.numeric_value, None);
}

#[test]
fn test_data_point_maps_numbers_and_dimensions() {
    let point = data_point(&json!({
        "IndicatorCode": "WHOSIS_000001",
        "Value": "78.5 [78.1-78.9]",
        "NumericValue": 78.5,
        "Low": 78.1,
        "High": "78.9",
        "SpatialDimType": "COUNTRY",
        "SpatialDim": "USA",
        "TimeDimType": "YEAR",
        "TimeDim": 2019,
        "Dim1": "BTSX",
        "Dim2": "",
        "DataSourceDim": null
    }));

    assert_eq!(point.numeric_value, Some(78.5));
    assert_eq!(point.low, Some(78.1));
    assert_eq!(point.high, Some(78.9));
    assert_eq!(point.spatial_dim.as_deref(), Some("USA"));
    assert_eq!(point.time_dim, Some(2019));
    assert_eq!(point.dim1.as_deref(), Some("BTSX"));
    assert_eq!(point.dim2, None);
    assert_eq!(point.data_source_code, None);
}

#[test]
fn test_zero_numeric_value_is_kept() {
    let point = data_point(&json!({ "NumericValue": 0 }));
    assert_eq!(point.numeric_value, Some(0.0));
}

#[test]
fn test_xml_decoded_strings_are_parsed() {
    let point = data_point(&json!({ "NumericValue": "4.2", "TimeDim": "2015" }));
    assert_eq!(point.numeric_value, Some(4.2));
    assert_eq!(point.time_dim, Some(2015));
}

fn point(country: Option<&str>, year: Option<i32>) -> DataPoint {
    DataPoint {
        spatial_dim: country.map(str::to_string),
        time_dim: year,
        ..DataPoint::default()
    }
}

#[test]
fn test_summary_counts_distinct_non_null_values() {
    let points = vec![
        point(Some("USA"), Some(2018)),
        point(Some("USA"), Some(2019)),
        point(Some("FRA"), Some(2019)),
        point(None, None),
    ];
    let summary = summarize(&points);

    assert_eq!(summary.unique_countries, 2);
    assert_eq!(summary.unique_years, 2);
    assert_eq!(summary.total_records, 4);
}

#[test]
fn test_summary_of_empty_table_is_zero() {
    let summary = summarize(&[]);
    assert_eq!(summary.unique_countries, 0);
    assert_eq!(summary.unique_years, 0);
    assert_eq!(summary.total_records, 0);
}
