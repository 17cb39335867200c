//! Application ports

pub mod services;

pub use services::HealthDataServiceInterface;
