//! Service configuration, built once at startup and passed by reference.

use clap::Args;
use std::time::Duration;

pub const DEFAULT_DATASET_URL: &str =
    "https://api.data.gov.my/data-catalogue?id=population_malaysia";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Settings shared by every subcommand. Each flag falls back to an
/// environment variable, which may come from a `.env` file.
#[derive(Args, Debug, Clone)]
pub struct ServiceConfig {
    /// URL of the population dataset (JSON array of rows), or a local file path
    #[arg(long, env = "POPULATION_DATASET_URL", default_value = DEFAULT_DATASET_URL)]
    pub dataset_url: String,

    /// Address the HTTP server listens on
    #[arg(long = "bind", env = "POPULATION_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: String,

    /// Per-attempt timeout for the remote fetch, in seconds
    #[arg(long, env = "POPULATION_FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// How many times a failed fetch is retried before giving up
    #[arg(long, env = "POPULATION_FETCH_RETRIES", default_value_t = 1)]
    pub fetch_retries: u32,
}

impl ServiceConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fetch_timeout_secs: 30,
            fetch_retries: 1,
        }
    }
}
