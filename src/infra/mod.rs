pub mod datagov;
pub mod local;

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::services::population_api::PopulationSource;
use datagov::DataGovClient;
use local::LocalFileSource;

/// Picks the source for `config.dataset_url`: HTTP(S) URLs go to the remote
/// client, anything else is read as a local file path.
pub fn source_from_config(config: &ServiceConfig) -> Result<Arc<dyn PopulationSource>> {
    if config.dataset_url.starts_with("http") {
        Ok(Arc::new(DataGovClient::new(config)?))
    } else {
        Ok(Arc::new(LocalFileSource::new(&config.dataset_url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PopulationError;

    #[tokio::test]
    async fn test_non_http_url_reads_local_file() {
        let config = ServiceConfig {
            dataset_url: "/nonexistent/rows.json".into(),
            ..Default::default()
        };
        let source = source_from_config(&config).unwrap();
        match source.fetch_rows().await {
            Err(PopulationError::DataUnavailable(msg)) => {
                assert!(msg.contains("/nonexistent/rows.json"))
            }
            other => panic!("expected file read error, got {other:?}"),
        }
    }
}
