//! Trait for anything that can supply raw population rows.

use crate::error::Result;
use crate::ingest::types::RawRecord;

/// Abstraction over a population dataset provider (e.g., data.gov.my).
#[async_trait::async_trait]
pub trait PopulationSource: Send + Sync {
    /// Returns every row of the dataset as currently published.
    ///
    /// Implementations must map transport and decoding failures to
    /// [`crate::error::PopulationError::DataUnavailable`].
    async fn fetch_rows(&self) -> Result<Vec<RawRecord>>;
}

/// Rows already held in memory, returned as-is on every call. Lets
/// callers that obtain rows elsewhere drive the pipeline directly.
pub struct StaticSource(pub Vec<RawRecord>);

#[async_trait::async_trait]
impl PopulationSource for StaticSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRecord>> {
        Ok(self.0.clone())
    }
}
