//! MCP Server Builder
//!
//! Ensures all required dependencies are provided before server
//! construction.

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;

use crate::McpServer;

/// Builder for MCP Server with dependency injection
#[derive(Default)]
pub struct McpServerBuilder {
    health_data_service: Option<Arc<dyn HealthDataServiceInterface>>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the health data service
    ///
    /// # Arguments
    /// * `service` - Implementation of the health data service port
    pub fn with_health_data_service(
        mut self,
        service: Arc<dyn HealthDataServiceInterface>,
    ) -> Self {
        self.health_data_service = Some(service);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the service is not provided
    pub fn build(self) -> Result<McpServer, BuilderError> {
        let health_data_service = self
            .health_data_service
            .ok_or(BuilderError::MissingDependency("health data service"))?;

        Ok(McpServer::new(health_data_service))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
