use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::{PopulationError, Result};
use crate::fetch::{BasicClient, HttpClient, fetch_with_retry};
use crate::ingest::types::RawRecord;
use crate::parser::parse_rows;
use crate::services::population_api::PopulationSource;

/// Reads the population catalogue from the data.gov.my open-data API, or
/// any endpoint serving the same JSON row layout.
pub struct DataGovClient<C = BasicClient> {
    http: C,
    url: String,
    timeout: Duration,
    retries: u32,
}

impl DataGovClient<BasicClient> {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let http = BasicClient::with_timeout(config.fetch_timeout()).map_err(|e| {
            PopulationError::data_unavailable(format!("failed to build HTTP client: {e}"))
        })?;
        Ok(Self::with_client(http, config))
    }
}

impl<C: HttpClient> DataGovClient<C> {
    pub fn with_client(http: C, config: &ServiceConfig) -> Self {
        Self {
            http,
            url: config.dataset_url.clone(),
            timeout: config.fetch_timeout(),
            retries: config.fetch_retries,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<C: HttpClient> PopulationSource for DataGovClient<C> {
    async fn fetch_rows(&self) -> Result<Vec<RawRecord>> {
        let bytes = fetch_with_retry(&self.http, &self.url, self.timeout, self.retries).await?;
        let rows = parse_rows(&bytes)?;
        info!(url = %self.url, rows = rows.len(), "Population rows fetched");
        Ok(rows)
    }
}
