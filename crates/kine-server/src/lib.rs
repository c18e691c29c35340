//! kine-server
//!
//! JSON HTTP API for the treatment simulator: case listing, the device
//! menu, deterministic validation and tutor feedback.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/cases", get(routes::cases::list_cases))
        .route("/cases/{id}", get(routes::cases::get_case_detail))
        .route("/devices", get(routes::devices::device_menu))
        .route("/power/mean", post(routes::power::mean_power))
        .route("/validate", post(routes::validate::validate_selection))
        .route("/evaluate", post(routes::evaluate::evaluate_selection))
        .layer(axum_mw::from_fn(middleware::request_log))
        .layer(cors)
        .with_state(state)
}
