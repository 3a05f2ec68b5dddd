//! HTTP routes for summary endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{generate_summary, SummaryAppState};

/// Creates the summary router with all routes.
pub fn summary_routes(state: SummaryAppState) -> Router {
    Router::new()
        // POST /api/summaries
        .route("/api/summaries", post(generate_summary))
        .with_state(state)
}
