use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

pub struct RootController;

impl RootController {
    /// Liveness probe for the front-end.
    pub async fn test(method: Method, uri: Uri) -> impl IntoResponse {
        debug!("test probe: {} {}", method, uri);
        (StatusCode::OK, Json(json!({ "message": "Niceeeeee" })))
    }
}
