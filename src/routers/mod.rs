pub mod music;
pub mod root;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
pub use music::music_routes;
pub use root::{fallback_route, test_route};

/// Builds the full HTTP surface over `catalog`.
pub fn app(catalog: Catalog) -> Router {
    // The catalog backs a browser front-end served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/test", get(test_route))
        .merge(music_routes())
        .fallback(fallback_route)
        .method_not_allowed_fallback(fallback_route)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(catalog)
}
