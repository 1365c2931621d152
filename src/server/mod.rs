//! HTTP surface: the summary API and the dashboard.

pub mod handlers;
pub mod response;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServiceConfig;
use crate::services::population_api::PopulationSource;

/// Immutable state shared by every handler. Holds configuration and the
/// data source only; no request ever writes to it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub source: Arc<dyn PopulationSource>,
}

impl AppState {
    pub fn new(config: ServiceConfig, source: Arc<dyn PopulationSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/population", get(handlers::population))
        .route("/dashboard", get(|| async { Redirect::permanent("/dashboard/") }))
        .route("/dashboard/", get(handlers::dashboard_page))
        .route("/dashboard/figure", get(handlers::dashboard_figure))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Binds `state.config.bind_addr` and serves until Ctrl+C.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let bind_addr = state.config.bind_addr.clone();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        dataset_url = %state.config.dataset_url,
        "Population server listening"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
