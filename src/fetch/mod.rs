mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use crate::error::{PopulationError, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// Issues a single GET and returns the body. Non-success statuses are errors.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(client: &C, url: &str) -> anyhow::Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}

/// Total attempts for a retry budget, saturating instead of overflowing.
fn attempt_count(retries: u32) -> u32 {
    retries.saturating_add(1)
}

/// Fetches `url`, bounding each attempt by `timeout` and retrying up to
/// `retries` more times. Every failure mode ends up as
/// [`PopulationError::DataUnavailable`].
#[tracing::instrument(skip(client, url, timeout), fields(url = %url, timeout_ms = timeout.as_millis() as u64))]
pub async fn fetch_with_retry<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
    timeout: Duration,
    retries: u32,
) -> Result<Vec<u8>> {
    let attempts = attempt_count(retries);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        let started = std::time::Instant::now();
        match tokio::time::timeout(timeout, fetch_bytes(client, url)).await {
            Ok(Ok(bytes)) => {
                debug!(
                    attempt,
                    bytes = bytes.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Dataset fetched"
                );
                return Ok(bytes);
            }
            Ok(Err(e)) => {
                warn!(attempt, attempts, error = %e, "Dataset fetch failed");
                last_error = e.to_string();
            }
            Err(_) => {
                warn!(attempt, attempts, "Dataset fetch timed out");
                last_error = format!("timed out after {}ms", timeout.as_millis());
            }
        }
    }

    Err(PopulationError::data_unavailable(format!(
        "fetching {url} failed after {attempts} attempt(s): {last_error}"
    )))
}
