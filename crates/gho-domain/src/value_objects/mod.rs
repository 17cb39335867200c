//! Immutable value objects

pub mod format;
pub mod query;
pub mod year;

pub use format::AcceptFormat;
pub use query::{CountryDataQuery, CrossTableQuery, HealthDataQuery};
pub use year::YearSpec;
