//! API request and response models for the HTTP boundary.
//!
//! These are Data Transfer Objects (DTOs) that define the shape of JSON
//! bodies. Successful analyses are returned as
//! [`glean_core::ExtractionResult`] directly.

use serde::{Deserialize, Serialize};

// =============================================================================
// Analyze Models (for `POST /analyze`)
// =============================================================================

/// Body of an analyze request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Source code to analyze.
    pub code: String,
    /// Language identifier, e.g. "c", "python", "javascript".
    pub language: String,
    /// Values to keep. Absent or empty keeps everything.
    #[serde(default)]
    pub targets: Option<Vec<String>>,
}

// =============================================================================
// Health Model (for `GET /health`)
// =============================================================================

/// Liveness response listing the supported languages.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub languages: Vec<&'static str>,
}

// =============================================================================
// Error Model
// =============================================================================

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
