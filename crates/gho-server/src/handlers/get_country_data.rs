//! Get Country Data Tool Handler

use std::sync::Arc;

use gho_application::HealthDataServiceInterface;
use gho_domain::value_objects::CountryDataQuery;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;

use super::{respond, validate_args};
use crate::args::CountryDataArgs;
use crate::constants::TOOL_GET_COUNTRY_DATA;

/// Handler for the get_country_data tool
pub struct GetCountryDataHandler {
    service: Arc<dyn HealthDataServiceInterface>,
}

impl GetCountryDataHandler {
    /// Create a new get_country_data handler
    pub fn new(service: Arc<dyn HealthDataServiceInterface>) -> Self {
        Self { service }
    }

    /// Handle the get_country_data tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<CountryDataArgs>,
    ) -> Result<CallToolResult, McpError> {
        validate_args(&args)?;

        let query = CountryDataQuery::from(args);
        respond(TOOL_GET_COUNTRY_DATA, self.service.get_country_data(&query).await)
    }
}
