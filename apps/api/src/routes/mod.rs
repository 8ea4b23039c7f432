pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::plan::handlers;
use crate::state::AppState;

pub const GENERATE_PLAN_PATH: &str = "/api/v1/generate-prep-plan";

/// Builds the full application: routes, permissive CORS (browser clients
/// call the endpoint cross-origin) and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(GENERATE_PLAN_PATH, post(handlers::handle_generate_plan))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
