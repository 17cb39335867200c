//! Health Data Service Use Case
//!
//! Composes upstream requests for each operation, fetches them through the
//! injected transport and normalizes the decoded payloads.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use gho_domain::constants::{
    COUNTRY_DATA_ORDER_BY, CROSS_TABLE_DEFAULT_LIMIT, CROSS_TABLE_ORDER_BY, DATA_SOURCE_LABEL,
    ENDPOINT_DIMENSION, ENDPOINT_INDICATOR, FIELD_INDICATOR_NAME, FIELD_SEX_DIM,
    FIELD_SPATIAL_DIM, FIELD_TIME_DIM, ODATA_FILTER, ODATA_ORDER_BY, ODATA_TOP,
};
use gho_domain::entities::{
    CrossTable, DataPoint, Dimension, DimensionCode, Indicator, ResultEnvelope,
};
use gho_domain::error::{Error, Result};
use gho_domain::ports::DataTransport;
use gho_domain::value_objects::{
    AcceptFormat, CountryDataQuery, CrossTableQuery, HealthDataQuery, YearSpec,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::normalize::{self, project_all, summarize};
use crate::ports::HealthDataServiceInterface;
use crate::query::{FilterBuilder, build_url, split_list};

/// Return the trimmed value or a missing-parameter error naming `field`
fn require<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::missing_parameter(field))
}

/// Health data service implementation
///
/// Holds only immutable configuration and the shared transport, so one
/// instance can serve concurrent calls.
pub struct HealthDataServiceImpl {
    transport: Arc<dyn DataTransport>,
    base_url: String,
    format: AcceptFormat,
}

impl HealthDataServiceImpl {
    /// Create a service requesting JSON from `base_url`
    pub fn new<S: Into<String>>(transport: Arc<dyn DataTransport>, base_url: S) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            format: AcceptFormat::Json,
        }
    }

    /// Request a different representation from the upstream
    pub fn with_format(mut self, format: AcceptFormat) -> Self {
        self.format = format;
        self
    }

    async fn fetch(&self, url: &str) -> Result<Value> {
        debug!(
            url,
            format = %self.format,
            transport = self.transport.transport_name(),
            "Fetching upstream"
        );
        let timer = Instant::now();

        let body = self
            .transport
            .fetch(url, self.format)
            .await
            .inspect_err(|e| warn!(url, error = %e, "Upstream request failed"))?;

        debug!(url, elapsed = ?timer.elapsed(), "Upstream responded");
        Ok(body)
    }
}

#[async_trait]
impl HealthDataServiceInterface for HealthDataServiceImpl {
    async fn list_dimensions(&self) -> Result<ResultEnvelope<Dimension>> {
        let url = build_url(&self.base_url, ENDPOINT_DIMENSION, &[]);
        let payload = self.fetch(&url).await?;

        let dimensions = project_all(&payload, normalize::dimension);
        info!(count = dimensions.len(), "Listed dimensions");
        Ok(ResultEnvelope::new("dimensions", dimensions, DATA_SOURCE_LABEL, url))
    }

    async fn list_dimension_codes(
        &self,
        dimension_code: Option<&str>,
    ) -> Result<ResultEnvelope<DimensionCode>> {
        let dimension_code = require(dimension_code, "dimension_code")?;

        let segment = format!("DIMENSION/{dimension_code}/DimensionValues");
        let url = build_url(&self.base_url, &segment, &[]);
        let payload = self.fetch(&url).await?;

        let codes = project_all(&payload, normalize::dimension_code);
        info!(dimension_code, count = codes.len(), "Listed dimension codes");
        Ok(
            ResultEnvelope::new("codes", codes, DATA_SOURCE_LABEL, url)
                .with_context("dimension_code", dimension_code),
        )
    }

    async fn search_indicators(
        &self,
        keywords: Option<&str>,
    ) -> Result<ResultEnvelope<Indicator>> {
        let keywords = require(keywords, "keywords")?;

        let filter = FilterBuilder::new()
            .contains(FIELD_INDICATOR_NAME, Some(keywords))
            .build();
        let url = build_url(&self.base_url, ENDPOINT_INDICATOR, &[(ODATA_FILTER, filter)]);
        let payload = self.fetch(&url).await?;

        let indicators = project_all(&payload, normalize::indicator);
        info!(keywords, count = indicators.len(), "Searched indicators");
        Ok(
            ResultEnvelope::new("indicators", indicators, DATA_SOURCE_LABEL, url)
                .with_context("keywords", keywords),
        )
    }

    async fn get_health_data(&self, query: &HealthDataQuery) -> Result<ResultEnvelope<DataPoint>> {
        let indicator_code = require(query.indicator_code.as_deref(), "indicator_code")?;

        let url = build_url(
            &self.base_url,
            indicator_code,
            &[
                (ODATA_FILTER, query.filter.clone()),
                (ODATA_TOP, query.limit.map(|l| l.to_string())),
                (ODATA_ORDER_BY, query.order_by.clone()),
            ],
        );
        let payload = self.fetch(&url).await?;

        let data = project_all(&payload, normalize::data_point);
        info!(indicator_code, count = data.len(), "Retrieved health data");
        Ok(
            ResultEnvelope::new("data", data, DATA_SOURCE_LABEL, url)
                .with_context("indicator_code", indicator_code),
        )
    }

    async fn get_country_data(
        &self,
        query: &CountryDataQuery,
    ) -> Result<ResultEnvelope<DataPoint>> {
        let indicator_code = require(query.indicator_code.as_deref(), "indicator_code")?;

        let year = query.year.as_deref().and_then(YearSpec::parse);
        let filter = FilterBuilder::new()
            .eq_text(FIELD_SPATIAL_DIM, query.country_code.as_deref())
            .year(FIELD_TIME_DIM, year.as_ref())
            .eq_text(FIELD_SEX_DIM, query.sex.as_deref())
            .build();

        self.get_health_data(&HealthDataQuery {
            indicator_code: Some(indicator_code.to_string()),
            filter,
            limit: query.limit,
            order_by: Some(COUNTRY_DATA_ORDER_BY.to_string()),
        })
        .await
    }

    async fn get_cross_table(&self, query: &CrossTableQuery) -> Result<CrossTable> {
        let indicator_code = require(query.indicator_code.as_deref(), "indicator_code")?;

        let countries = query
            .countries
            .as_deref()
            .map(split_list)
            .unwrap_or_default();
        let years = query.years.as_deref().and_then(YearSpec::parse);
        let filter = FilterBuilder::new()
            .one_of(FIELD_SPATIAL_DIM, &countries)
            .year(FIELD_TIME_DIM, years.as_ref())
            .eq_text(FIELD_SEX_DIM, query.sex.as_deref())
            .build();

        let envelope = self
            .get_health_data(&HealthDataQuery {
                indicator_code: Some(indicator_code.to_string()),
                filter,
                limit: Some(query.limit.unwrap_or(CROSS_TABLE_DEFAULT_LIMIT)),
                order_by: Some(CROSS_TABLE_ORDER_BY.to_string()),
            })
            .await?;

        let api_url = envelope.api_url().to_string();
        let source = envelope.source().to_string();
        let structured_data = envelope.into_items();
        let summary = summarize(&structured_data);
        info!(
            indicator_code,
            unique_countries = summary.unique_countries,
            unique_years = summary.unique_years,
            total_records = summary.total_records,
            "Built cross table"
        );

        Ok(CrossTable {
            indicator: indicator_code.to_string(),
            structured_data,
            summary,
            source,
            api_url,
        })
    }
}
