use axum::Json;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::PopulationError;

#[must_use]
pub fn error_status(err: &PopulationError) -> StatusCode {
    match err {
        PopulationError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        PopulationError::InvalidSelection(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for PopulationError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }));
        let mut resp = (status, body).into_response();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            resp.headers_mut()
                .insert("retry-after", HeaderValue::from_static("30"));
        }
        resp
    }
}
