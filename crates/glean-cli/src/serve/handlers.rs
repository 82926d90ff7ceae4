//! HTTP route handlers.
//!
//! Handlers are kept thin, delegating the analysis itself to
//! [`glean_core::Analyzer`].

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use glean_core::{AnalysisError, ExtractionResult};

use super::models::{AnalyzeRequest, ErrorResponse, HealthResponse};
use super::AppState;

// =============================================================================
// Errors
// =============================================================================

/// Failure of a request, mapped to a status code and a `{"detail": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    Analysis(AnalysisError),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Analysis(AnalysisError::UnsupportedLanguage { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(AnalysisError::Parse { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(AnalysisError::Extraction(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Analysis(e) => e.to_string(),
            ApiError::Internal(message) => message.clone(),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        ApiError::Analysis(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Analysis task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(detail = %self.detail(), "Request failed");
        } else {
            tracing::debug!(status = %status, detail = %self.detail(), "Request rejected");
        }
        (status, Json(ErrorResponse { detail: self.detail() })).into_response()
    }
}

// =============================================================================
// API Handlers
// =============================================================================

/// GET `/health` - Liveness plus the languages the front-end supports.
///
/// Response format:
/// ```json
/// {"status": "ok", "languages": ["c", "cpp", "python"]}
/// ```
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        languages: state.analyzer.languages(),
    })
}

/// POST `/analyze` - Extract concepts from a snippet.
///
/// Request format:
/// ```json
/// {"code": "if (x > 0) { f(x); }", "language": "c", "targets": ["f"]}
/// ```
///
/// The response has one key per concept category, each holding a sorted
/// list of values.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ExtractionResult>, ApiError> {
    let analyzer = Arc::clone(&state.analyzer);

    // Parsing and traversal are CPU-bound; keep them off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        analyzer.analyze(
            &request.code,
            &request.language,
            request.targets.as_deref(),
        )
    })
    .await??;

    Ok(Json(result))
}
