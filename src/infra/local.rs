use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::error::{PopulationError, Result};
use crate::ingest::types::RawRecord;
use crate::parser::parse_rows;
use crate::services::population_api::PopulationSource;

/// Reads the dataset from a local JSON file, re-reading it on every call.
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PopulationSource for LocalFileSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRecord>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            PopulationError::data_unavailable(format!(
                "reading {} failed: {e}",
                self.path.display()
            ))
        })?;
        let rows = parse_rows(&bytes)?;
        info!(path = %self.path.display(), rows = rows.len(), "Population rows read");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[tokio::test]
    async fn test_reads_rows_from_file() {
        let path = env::temp_dir().join("population_dashboard_local_rows.json");
        fs::write(
            &path,
            br#"[{"date": "2021-01-01", "age": "overall", "sex": "both", "ethnicity": "overall", "population": 3}]"#,
        )
        .unwrap();

        let rows = LocalFileSource::new(&path).fetch_rows().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].population, Some(3.0));

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_data_unavailable() {
        let source = LocalFileSource::new("/nonexistent/population_dashboard.json");
        let result = source.fetch_rows().await;
        assert!(matches!(result, Err(PopulationError::DataUnavailable(_))));
    }
}
