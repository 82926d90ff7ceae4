//! Analysis error types.

use thiserror::Error;

use crate::concepts::ExtractionError;

/// Errors that can end an analysis call.
///
/// Every variant is terminal for the call that raised it; no partial result
/// accompanies any of them.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The language identifier is not known to the registry.
    #[error("Unsupported language '{language}'")]
    UnsupportedLanguage { language: String },

    /// The front-end could not produce a tree at all.
    #[error("Parse error: {message}")]
    Parse { language: String, message: String },

    /// Classification failed while walking the tree.
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

impl AnalysisError {
    pub fn unsupported(language: impl Into<String>) -> Self {
        AnalysisError::UnsupportedLanguage {
            language: language.into(),
        }
    }

    pub fn parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        AnalysisError::Parse {
            language: language.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::UnsupportedLanguage { .. } => "unsupported_language",
            AnalysisError::Parse { .. } => "parse_error",
            AnalysisError::Extraction(_) => "extraction_error",
        }
    }
}
