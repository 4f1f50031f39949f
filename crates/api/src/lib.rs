pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use routes::AppState;

/// `/api/*` routes; anything else goes to the static frontend when one is configured.
pub fn build_router(state: AppState, frontend_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/companies", get(routes::list_companies))
        .route("/api/analyze/:name", get(routes::analyze_company))
        .route("/api/compare", post(routes::compare_companies))
        .route("/api/health", get(routes::health));

    let router = match frontend_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router.fallback(routes::not_found),
    };

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
