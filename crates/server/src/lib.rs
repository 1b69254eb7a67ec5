pub mod config;
pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the share service router.
pub fn app(config: config::Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/games/parse", post(routes::games::parse_game))
        .route("/api/games/share", post(routes::games::share_game))
        .route("/api/games/shared", get(routes::games::get_shared_game))
        .layer(Extension(config))
        .layer(cors)
}
