pub mod error;
pub mod health;
pub mod simulation;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

pub use error::ApiError;

/// Build the HTTP router. Handlers hold no shared state: every request runs the
/// simulation from scratch.
pub fn router(cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/data/json", get(simulation::get_json))
        .route("/data/csv", get(simulation::get_csv))
        .route("/api/v1/simulation", get(simulation::get_simulation))
        .route("/healthz", get(health::healthz));

    if cfg.server.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([axum::http::Method::GET]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
