use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport seam for outbound requests. Tests and alternative transports
/// implement this instead of talking to `reqwest::Client` directly.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
