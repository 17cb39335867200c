//! OData filter composition
//!
//! Clauses are collected in call order and joined with `and`. Every method
//! ignores absent or blank input, so callers can feed optional parameters
//! straight through.

use gho_domain::value_objects::YearSpec;

/// Quote a string literal for the filter grammar
///
/// Embedded single quotes are doubled, as the OData literal grammar
/// requires.
///
/// ```
/// use gho_application::query::quote_literal;
///
/// assert_eq!(quote_literal("USA"), "'USA'");
/// assert_eq!(quote_literal("Côte d'Ivoire"), "'Côte d''Ivoire'");
/// ```
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Split a comma separated list, trimming entries and dropping blanks
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builder for `$filter` expressions
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    clauses: Vec<String>,
}

impl FilterBuilder {
    /// Start an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// `field eq 'value'`
    pub fn eq_text(mut self, field: &str, value: Option<&str>) -> Self {
        if let Some(value) = non_blank(value) {
            self.clauses.push(format!("{field} eq {}", quote_literal(value)));
        }
        self
    }

    /// `field eq Y` or `field ge A and field le B`
    ///
    /// Year bounds are numeric in the grammar and rendered unquoted.
    pub fn year(mut self, field: &str, spec: Option<&YearSpec>) -> Self {
        match spec {
            Some(YearSpec::Single(year)) => {
                self.clauses.push(format!("{field} eq {year}"));
            }
            Some(YearSpec::Range { from, to }) => {
                self.clauses.push(format!("{field} ge {from} and {field} le {to}"));
            }
            None => {}
        }
        self
    }

    /// `field in ('a','b')`
    pub fn one_of(mut self, field: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            let quoted: Vec<String> = values.iter().map(|v| quote_literal(v)).collect();
            self.clauses.push(format!("{field} in ({})", quoted.join(",")));
        }
        self
    }

    /// `contains(field,'text')`
    pub fn contains(mut self, field: &str, text: Option<&str>) -> Self {
        if let Some(text) = non_blank(text) {
            self.clauses.push(format!("contains({field},{})", quote_literal(text)));
        }
        self
    }

    /// Whether no clause has been added
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Join the clauses; `None` when there are none
    pub fn build(self) -> Option<String> {
        if self.clauses.is_empty() {
            None
        } else {
            Some(self.clauses.join(" and "))
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
