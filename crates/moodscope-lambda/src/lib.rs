//! moodscope-lambda
//!
//! HTTP boundary between the scoring engine and its collaborators: the
//! question-flow UI posts answers, the persistence layer stores what comes
//! back.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use config::ServiceConfig;
use state::AppState;

pub fn build_router(config: ServiceConfig) -> Router {
    let state = AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/classify", post(routes::classify::classify_score))
        .route("/assessments", post(routes::assessments::score_assessment))
        .route(
            "/assessments/resolve",
            post(routes::assessments::resolve_assessment),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
