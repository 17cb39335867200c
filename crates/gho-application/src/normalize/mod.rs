//! Response Normalizer
//!
//! Maps decoded upstream payloads onto the fixed output entities.

pub mod projections;
pub mod record;
pub mod summary;

pub use projections::{data_point, dimension, dimension_code, indicator, project_all};
pub use record::{Record, records};
pub use summary::summarize;
