//! Upstream representation negotiation

use serde::{Deserialize, Serialize};

/// Representation requested from the upstream via the `Accept` header
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AcceptFormat {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml` (OData Atom feed)
    Xml,
}

impl AcceptFormat {
    /// MIME type sent in the `Accept` header
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

impl std::fmt::Display for AcceptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
        }
    }
}
