use axum::http::{Method, Uri};

use crate::controllers::RootController;
use crate::error::AppError;

pub async fn test_route(method: Method, uri: Uri) -> impl axum::response::IntoResponse {
    RootController::test(method, uri).await
}

pub async fn fallback_route(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
