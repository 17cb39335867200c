//! Composition root
//!
//! Builds the shared HTTP transport from configuration and wires it into the
//! health data service.
//!
//! ```text
//! AppConfig → HttpClientConfig → ReqwestTransport → HealthDataServiceImpl
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//! let service = context.health_data_service();
//! ```

use std::sync::Arc;
use std::time::Duration;

use gho_application::{HealthDataServiceImpl, HealthDataServiceInterface};
use gho_domain::error::Result;
use gho_domain::ports::DataTransport;
use gho_providers::http::HttpClientConfig;
use gho_providers::transport::ReqwestTransport;
use tracing::info;

use crate::config::AppConfig;

/// Application context holding the configuration and wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    transport: Arc<dyn DataTransport>,
    health_data_service: Arc<dyn HealthDataServiceInterface>,
}

impl AppContext {
    /// Health data service
    pub fn health_data_service(&self) -> Arc<dyn HealthDataServiceInterface> {
        Arc::clone(&self.health_data_service)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("transport", &self.transport.transport_name())
            .finish_non_exhaustive()
    }
}

/// Wire the application from configuration using the reqwest transport
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let client_config = HttpClientConfig {
        timeout: Duration::from_secs(config.upstream.timeout_secs),
        user_agent: config.upstream.user_agent.clone(),
        ..HttpClientConfig::default()
    };
    let transport: Arc<dyn DataTransport> =
        Arc::new(ReqwestTransport::from_config(&client_config)?);

    Ok(init_app_with_transport(config, transport))
}

/// Wire the application around an existing transport
pub fn init_app_with_transport(
    config: AppConfig,
    transport: Arc<dyn DataTransport>,
) -> AppContext {
    let service = HealthDataServiceImpl::new(Arc::clone(&transport), &config.upstream.base_url)
        .with_format(config.upstream.accept_format);

    info!(
        base_url = %config.upstream.base_url,
        format = %config.upstream.accept_format,
        transport = transport.transport_name(),
        "Application initialized"
    );

    AppContext {
        config: Arc::new(config),
        transport,
        health_data_service: Arc::new(service),
    }
}
