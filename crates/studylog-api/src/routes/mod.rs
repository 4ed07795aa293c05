use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // Record endpoints
        .route(
            "/records",
            get(handlers::records::list_records).post(handlers::records::add_record),
        )
        .route("/records/reset", post(handlers::records::reset_records))

        // Report
        .route("/report", get(handlers::report::generate_report))

        // Add state
        .with_state(state)

        // Add CORS and request tracing
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
