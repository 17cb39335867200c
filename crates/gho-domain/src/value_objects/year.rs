//! Year constraints

use crate::constants::YEAR_RANGE_SEPARATOR;

/// A single year or an inclusive year range
///
/// Bounds are kept as the caller wrote them (trimmed); no numeric
/// validation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearSpec {
    /// `TimeDim eq <year>`
    Single(String),
    /// `TimeDim ge <from> and TimeDim le <to>`
    Range {
        /// Inclusive lower bound
        from: String,
        /// Inclusive upper bound
        to: String,
    },
}

impl YearSpec {
    /// Parse `2019` or `2018:2020`; blank input yields `None`
    ///
    /// ```
    /// use gho_domain::value_objects::YearSpec;
    ///
    /// assert_eq!(YearSpec::parse("2019"), Some(YearSpec::Single("2019".into())));
    /// assert_eq!(
    ///     YearSpec::parse("2018:2020"),
    ///     Some(YearSpec::Range { from: "2018".into(), to: "2020".into() })
    /// );
    /// assert_eq!(YearSpec::parse("  "), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        match input.split_once(YEAR_RANGE_SEPARATOR) {
            Some((from, to)) => Some(Self::Range {
                from: from.trim().to_string(),
                to: to.trim().to_string(),
            }),
            None => Some(Self::Single(input.to_string())),
        }
    }
}
