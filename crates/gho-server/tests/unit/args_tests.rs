//! Tests for tool argument validation

use gho_domain::{CrossTableQuery, HealthDataQuery};
use gho_server::args::{CountryDataArgs, CrossTableArgs, HealthDataArgs, ListDimensionCodesArgs};
use serde_json::json;
use validator::Validate;

#[test]
fn test_absent_identifiers_pass_validation() {
    assert!(CountryDataArgs::default().validate().is_ok());
    assert!(ListDimensionCodesArgs::default().validate().is_ok());

    let blank = ListDimensionCodesArgs {
        dimension_code: Some("  ".to_string()),
    };
    assert!(blank.validate().is_ok());
}

#[test]
fn test_limit_range_is_enforced() {
    for (limit, ok) in [(0, false), (1, true), (10_000, true), (10_001, false)] {
        let args = HealthDataArgs {
            limit: Some(limit),
            ..HealthDataArgs::default()
        };
        assert_eq!(args.validate().is_ok(), ok, "limit {limit}");
    }
}

#[test]
fn test_year_format_is_enforced() {
    for (year, ok) in [
        ("2020", true),
        ("2015:2020", true),
        (" 2015 : 2020 ", true),
        ("20", false),
        ("2020:", false),
        ("last year", false),
    ] {
        let args = CountryDataArgs {
            year: Some(year.to_string()),
            ..CountryDataArgs::default()
        };
        assert_eq!(args.validate().is_ok(), ok, "year {year:?}");
    }
}

#[test]
fn test_codes_must_be_tokens() {
    let bad = CountryDataArgs {
        country_code: Some("USA' or 1 eq 1".to_string()),
        ..CountryDataArgs::default()
    };
    assert!(bad.validate().is_err());

    let good = CountryDataArgs {
        indicator_code: Some("WHOSIS_000001".to_string()),
        country_code: Some("USA".to_string()),
        sex: Some("FMLE".to_string()),
        ..CountryDataArgs::default()
    };
    assert!(good.validate().is_ok());
}

#[test]
fn test_country_list_entries_must_be_tokens() {
    let good = CrossTableArgs {
        countries: Some("USA, FRA,DEU".to_string()),
        ..CrossTableArgs::default()
    };
    assert!(good.validate().is_ok());

    let bad = CrossTableArgs {
        countries: Some("USA;FRA".to_string()),
        ..CrossTableArgs::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn test_args_deserialize_from_flat_object() {
    let args: CrossTableArgs = serde_json::from_value(json!({
        "indicator_code": "WHOSIS_000001",
        "countries": "USA,FRA",
        "years": "2018:2020",
        "limit": 50
    }))
    .unwrap();

    let query = CrossTableQuery::from(args);
    assert_eq!(query.indicator_code.as_deref(), Some("WHOSIS_000001"));
    assert_eq!(query.countries.as_deref(), Some("USA,FRA"));
    assert_eq!(query.limit, Some(50));
    assert_eq!(query.sex, None);
}

#[test]
fn test_health_data_args_convert_to_query() {
    let args = HealthDataArgs {
        indicator_code: Some("X".to_string()),
        filter: Some("SpatialDim eq 'USA'".to_string()),
        limit: Some(3),
        order_by: Some("TimeDim desc".to_string()),
    };
    let query = HealthDataQuery::from(args);
    assert_eq!(query.filter.as_deref(), Some("SpatialDim eq 'USA'"));
    assert_eq!(query.order_by.as_deref(), Some("TimeDim desc"));
}
