//! Ingestion and cleaning of the raw population dataset.
//!
//! Rows come from a [`PopulationSource`], dates are parsed and filtered to
//! the analysis window, and a [`DatasetProfile`] is logged for diagnostics.

pub mod clean;
pub mod profile;
pub mod types;
pub mod utility;

pub use clean::{clean, parse_date};
pub use profile::DatasetProfile;
pub use types::{CleanedDataset, RawRecord, Record};

use crate::error::Result;
use crate::services::population_api::PopulationSource;
use tracing::info;

/// Fetches a fresh copy of the dataset and cleans it. Nothing is cached
/// between calls.
///
/// # Errors
///
/// Propagates [`crate::error::PopulationError::DataUnavailable`] from the
/// source unchanged.
#[tracing::instrument(skip(source))]
pub async fn fetch_and_clean(source: &dyn PopulationSource) -> Result<CleanedDataset> {
    let raw = source.fetch_rows().await?;
    let raw_rows = raw.len();

    let dataset = clean(raw);
    info!(raw_rows, kept = dataset.len(), "Dataset ingested");

    DatasetProfile::from_dataset(&dataset).log();

    Ok(dataset)
}
