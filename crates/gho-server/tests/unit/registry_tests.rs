//! Tool Registry Tests

use gho_server::tools::create_tool_list;

#[test]
fn test_all_tools_are_listed_in_order() {
    let tools = create_tool_list().expect("schemas should generate");
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();

    assert_eq!(
        names,
        vec![
            "list_dimensions",
            "list_dimension_codes",
            "search_indicators",
            "get_health_data",
            "get_country_data",
            "get_cross_table",
        ]
    );
}

#[test]
fn test_tool_schemas_describe_arguments() {
    let tools = create_tool_list().unwrap();
    let cross_table = tools
        .iter()
        .find(|t| t.name == "get_cross_table")
        .expect("cross table tool");

    let properties = cross_table
        .input_schema
        .get("properties")
        .and_then(|p| p.as_object())
        .expect("schema properties");
    for key in ["indicator_code", "countries", "years", "sex", "limit"] {
        assert!(properties.contains_key(key), "missing {key}");
    }
    assert!(tools.iter().all(|t| t.description.is_some()));
}
