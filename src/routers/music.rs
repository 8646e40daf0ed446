// Music catalog routes
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
};

use crate::catalog::Catalog;
use crate::controllers::MusicController;
use crate::error::AppError;
use crate::models::song::Song;

pub async fn list_music_route(State(catalog): State<Catalog>) -> Json<Vec<Song>> {
    MusicController::list(&catalog).await
}

pub async fn get_music_route(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Json<Song>, AppError> {
    MusicController::get(&catalog, &id).await
}

pub async fn create_music_route(
    State(catalog): State<Catalog>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Vec<Song>>, AppError> {
    MusicController::create(&catalog, &headers, &body).await
}

pub async fn delete_music_route(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Song>>, AppError> {
    MusicController::delete(&catalog, &id).await
}

pub fn music_routes() -> Router<Catalog> {
    Router::new()
        .route("/api/music", get(list_music_route).post(create_music_route))
        .route(
            "/api/music/{id}",
            get(get_music_route).delete(delete_music_route),
        )
}
