//! HTTP handlers for summary endpoints.
//!
//! These handlers connect Axum routes to the application layer.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::summary::{GenerateSummaryError, GenerateSummaryHandler};

use super::dto::{ErrorResponse, GenerateSummaryRequest, GenerateSummaryResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Summary API error that implements IntoResponse.
pub enum SummaryApiError {
    BadRequest(String),
    Unauthorized(String),
    Upstream(String),
    Internal(String),
}

impl IntoResponse for SummaryApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            SummaryApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            SummaryApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::unauthorized(msg))
            }
            SummaryApiError::Upstream(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::upstream(msg))
            }
            SummaryApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<GenerateSummaryError> for SummaryApiError {
    fn from(error: GenerateSummaryError) -> Self {
        match error {
            GenerateSummaryError::AccessDenied(reason) => {
                SummaryApiError::Unauthorized(reason.user_message().to_string())
            }
            GenerateSummaryError::InvalidInput(err) => SummaryApiError::BadRequest(err.to_string()),
            GenerateSummaryError::Provider(err) => {
                SummaryApiError::Upstream(format!("Summary generation failed: {}", err))
            }
            GenerateSummaryError::Transfer(err) => {
                SummaryApiError::Upstream(format!("Document upload failed: {}", err))
            }
            GenerateSummaryError::Serialization(err) => {
                SummaryApiError::Internal(format!("Document creation failed: {}", err))
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the summary endpoints.
#[derive(Clone)]
pub struct SummaryAppState {
    pub handler: Arc<GenerateSummaryHandler>,
}

impl SummaryAppState {
    pub fn new(handler: Arc<GenerateSummaryHandler>) -> Self {
        Self { handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /api/summaries` - run one submission through the pipeline.
pub async fn generate_summary(
    State(state): State<SummaryAppState>,
    Json(request): Json<GenerateSummaryRequest>,
) -> Result<Json<GenerateSummaryResponse>, SummaryApiError> {
    let result = state.handler.handle(request.into_command()).await?;
    Ok(Json(GenerateSummaryResponse::from(result)))
}
