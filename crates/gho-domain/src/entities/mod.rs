//! Domain entities
//!
//! Transient, request-scoped value objects built fresh from each upstream
//! payload. Nothing here is cached or mutated after construction.

/// Indicator observations
pub mod data_point;
/// Dimensions and dimension codes
pub mod dimension;
/// Result envelopes and the cross table aggregate
pub mod envelope;
/// Indicator metadata
pub mod indicator;

pub use data_point::DataPoint;
pub use dimension::{Dimension, DimensionCode};
pub use envelope::{CrossTable, CrossTableSummary, ResultEnvelope};
pub use indicator::Indicator;
