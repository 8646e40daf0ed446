//! Error types that turn into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum AppError {
    /// No song matched the requested id, or the id was not a number.
    #[error("No music found.")]
    NotFound,

    /// The request body could not be read as a song.
    #[error("{0}")]
    BadRequest(String),

    #[error("Cannot {method} {path}")]
    RouteNotFound { method: String, path: String },
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => AppError::NotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Misses are reported as 403 rather than 404; clients depend on it.
        let status = match self {
            AppError::NotFound => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_forbidden() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn catalog_miss_converts_to_not_found() {
        let err: AppError = CatalogError::NotFound(9).into();
        assert!(matches!(err, AppError::NotFound));
        assert_eq!(err.to_string(), "No music found.");
    }

    #[test]
    fn route_not_found_message() {
        let err = AppError::RouteNotFound {
            method: "PUT".into(),
            path: "/api/music".into(),
        };
        assert_eq!(err.to_string(), "Cannot PUT /api/music");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
