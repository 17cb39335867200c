//! Result envelopes
//!
//! Every operation wraps its payload with provenance metadata so callers can
//! trace a result back to the exact upstream request.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::DataPoint;

/// Uniform wrapper `{ ...payload, total_count, source, api_url }`
///
/// `total_count` is derived from the item list on every read, so it always
/// equals the number of items. Context entries (e.g. the indicator code a
/// listing was requested for) are serialized ahead of the payload.
///
/// ```
/// use gho_domain::entities::{Dimension, ResultEnvelope};
///
/// let envelope = ResultEnvelope::new(
///     "dimensions",
///     vec![Dimension::default()],
///     "source",
///     "https://example.org/api/Dimension",
/// );
/// let json = serde_json::to_value(&envelope).unwrap();
/// assert_eq!(json["total_count"], 1);
/// assert!(json["dimensions"].is_array());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope<T> {
    payload_key: &'static str,
    context: Vec<(&'static str, String)>,
    items: Vec<T>,
    source: String,
    api_url: String,
}

impl<T> ResultEnvelope<T> {
    /// Wrap `items` under `payload_key`
    pub fn new<S: Into<String>, U: Into<String>>(
        payload_key: &'static str,
        items: Vec<T>,
        source: S,
        api_url: U,
    ) -> Self {
        Self {
            payload_key,
            context: Vec::new(),
            items,
            source: source.into(),
            api_url: api_url.into(),
        }
    }

    /// Attach a scalar context entry serialized next to the payload
    pub fn with_context<S: Into<String>>(mut self, key: &'static str, value: S) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Key the payload list is serialized under
    pub fn payload_key(&self) -> &'static str {
        self.payload_key
    }

    /// Look up a context entry by key
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Payload items
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the envelope and return its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of payload items
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Provenance label
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Exact resolved request URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl<T: Serialize> Serialize for ResultEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.context.len() + 4))?;
        for (key, value) in &self.context {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(self.payload_key, &self.items)?;
        map.serialize_entry("total_count", &self.total_count())?;
        map.serialize_entry("source", &self.source)?;
        map.serialize_entry("api_url", &self.api_url)?;
        map.end()
    }
}

/// Summary statistics over a cross table
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrossTableSummary {
    /// Distinct non-null spatial codes
    pub unique_countries: usize,
    /// Distinct non-null years
    pub unique_years: usize,
    /// Number of records in the table
    pub total_records: usize,
}

/// Derived, read-only aggregate over a list of data points
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrossTable {
    /// Indicator code the table was built for
    pub indicator: String,
    /// Observations, in upstream order
    pub structured_data: Vec<DataPoint>,
    /// Summary statistics over `structured_data`
    pub summary: CrossTableSummary,
    /// Provenance label
    pub source: String,
    /// Exact resolved request URL
    pub api_url: String,
}
