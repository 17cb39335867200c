//! Use case implementations

pub mod health_data_service;

pub use health_data_service::HealthDataServiceImpl;
