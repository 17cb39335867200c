//! Application Service Port Interfaces
//!
//! Contracts the MCP shell depends on. Handlers hold these behind `Arc<dyn _>`
//! so they can be exercised with test doubles.

use async_trait::async_trait;
use gho_domain::entities::{
    CrossTable, DataPoint, Dimension, DimensionCode, Indicator, ResultEnvelope,
};
use gho_domain::error::Result;
use gho_domain::value_objects::{CountryDataQuery, CrossTableQuery, HealthDataQuery};

// ============================================================================
// Health Data Service Interface
// ============================================================================

/// Health Data Service Interface
///
/// One method per exposed operation. Each performs at most one upstream
/// request; required identifiers are checked before any request is made.
#[async_trait]
pub trait HealthDataServiceInterface: Send + Sync {
    /// List every dimension
    async fn list_dimensions(&self) -> Result<ResultEnvelope<Dimension>>;

    /// List the codes of one dimension
    async fn list_dimension_codes(
        &self,
        dimension_code: Option<&str>,
    ) -> Result<ResultEnvelope<DimensionCode>>;

    /// Search indicators whose name contains `keywords`
    async fn search_indicators(&self, keywords: Option<&str>) -> Result<ResultEnvelope<Indicator>>;

    /// Fetch raw indicator observations
    async fn get_health_data(&self, query: &HealthDataQuery) -> Result<ResultEnvelope<DataPoint>>;

    /// Fetch observations constrained by country, year and sex
    async fn get_country_data(
        &self,
        query: &CountryDataQuery,
    ) -> Result<ResultEnvelope<DataPoint>>;

    /// Fetch observations for several countries with summary statistics
    async fn get_cross_table(&self, query: &CrossTableQuery) -> Result<CrossTable>;
}
