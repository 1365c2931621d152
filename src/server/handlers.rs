use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::{error, info};

use crate::dashboard::{self, Figure, SummaryType};
use crate::error::PopulationError;
use crate::pipeline::population_summary;
use crate::server::AppState;
use crate::summary::SummaryResult;

/// `GET /population`: the four summaries, recomputed from a fresh fetch.
#[tracing::instrument(skip(state))]
pub async fn population(
    State(state): State<AppState>,
) -> Result<Json<SummaryResult>, PopulationError> {
    match population_summary(state.source.as_ref()).await {
        Ok(summary) => {
            info!(
                years = summary.total_population_per_year.len(),
                "Population summary served"
            );
            Ok(Json(summary))
        }
        Err(e) => {
            error!(error = %e, "Population summary failed");
            Err(e)
        }
    }
}

pub async fn dashboard_page() -> Html<&'static str> {
    Html(dashboard::INDEX_HTML)
}

#[derive(Debug, Deserialize)]
pub struct FigureQuery {
    pub summary_type: Option<String>,
}

/// `GET /dashboard/figure?summary_type=…`. Always answers 200; failures
/// come back as placeholder figures so the page can keep rendering.
#[tracing::instrument(skip(state))]
pub async fn dashboard_figure(
    State(state): State<AppState>,
    Query(query): Query<FigureQuery>,
) -> Json<Figure> {
    let requested = query.summary_type.as_deref().unwrap_or("total");
    let selection = match requested.parse::<SummaryType>() {
        Ok(selection) => selection,
        Err(e) => return Json(dashboard::error_figure(&e)),
    };

    let figure = match population_summary(state.source.as_ref()).await {
        Ok(summary) => dashboard::build_figure(selection, &summary),
        Err(e) => {
            error!(error = %e, selection = %selection, "Dashboard data load failed");
            dashboard::error_figure(&e)
        }
    };
    Json(figure)
}

pub async fn health() -> &'static str {
    "ok"
}
