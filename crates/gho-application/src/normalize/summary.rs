//! Cross table summary statistics

use std::collections::HashSet;

use gho_domain::entities::{CrossTableSummary, DataPoint};

/// Count distinct spatial codes and years, and total records
///
/// Values are compared as published: no case folding, no code
/// canonicalization. Missing values are not counted.
pub fn summarize(points: &[DataPoint]) -> CrossTableSummary {
    let countries: HashSet<&str> = points
        .iter()
        .filter_map(|p| p.spatial_dim.as_deref())
        .collect();
    let years: HashSet<i32> = points.iter().filter_map(|p| p.time_dim).collect();

    CrossTableSummary {
        unique_countries: countries.len(),
        unique_years: years.len(),
        total_records: points.len(),
    }
}
