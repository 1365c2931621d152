//! One full fetch → clean → summarize cycle.

use crate::error::Result;
use crate::ingest::fetch_and_clean;
use crate::services::population_api::PopulationSource;
use crate::summary::{SummaryResult, summarize};

/// Runs the whole pipeline against a fresh fetch. Nothing is shared between
/// calls, so concurrent callers never observe each other's data.
pub async fn population_summary(source: &dyn PopulationSource) -> Result<SummaryResult> {
    let dataset = fetch_and_clean(source).await?;
    Ok(summarize(&dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PopulationError;
    use crate::ingest::types::RawRecord;
    use crate::services::population_api::StaticSource;

    fn raw(date: &str, age: &str, sex: &str, population: f64) -> RawRecord {
        RawRecord {
            date: Some(date.into()),
            age: Some(age.into()),
            sex: Some(sex.into()),
            ethnicity: Some("overall".into()),
            population: Some(population),
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl PopulationSource for FailingSource {
        async fn fetch_rows(&self) -> Result<Vec<RawRecord>> {
            Err(PopulationError::data_unavailable("network down"))
        }
    }

    #[tokio::test]
    async fn test_pipeline_drops_old_rows_before_summarizing() {
        let source = StaticSource(vec![
            raw("2019-06-01", "overall", "both", 999.0),
            raw("2021-01-01", "overall", "male", 100.0),
            raw("2021-01-01", "overall", "female", 90.0),
            raw("garbage", "overall", "male", 5.0),
        ]);
        let summary = population_summary(&source).await.unwrap();

        assert_eq!(summary.total_population_per_year.len(), 1);
        assert_eq!(summary.total_population_per_year["2021"], "190");
    }

    #[tokio::test]
    async fn test_pipeline_propagates_source_failure() {
        let result = population_summary(&FailingSource).await;
        assert!(matches!(result, Err(PopulationError::DataUnavailable(_))));
    }
}
