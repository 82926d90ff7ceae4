pub mod analyzer;
pub mod concepts;
pub mod config;
pub mod error;
pub mod parser;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use concepts::{ConceptCategory, ExtractionError, ExtractionResult};
pub use config::{Config, ConfigError};
pub use error::AnalysisError;
