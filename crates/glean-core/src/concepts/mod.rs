//! Concept extraction engine.
//!
//! Turns a syntax tree into categorized sets of textual concepts: keywords,
//! operators, control structures, function calls, identifiers and literals.
//!
//! ## Components
//!
//! - [`SyntaxNode`] - Read-only tree view the engine consumes
//! - [`ClassificationTable`] - Type tag to category rules
//! - [`ConceptExtractor`] - Single iterative depth-first classification pass
//! - [`filter_concepts`] - Sorting and value-based target filtering
//!
//! Nothing in this module parses text or knows about transports; trees come
//! from [`crate::parser`] or any other [`SyntaxNode`] implementation.

mod error;
mod extractor;
mod filter;
mod result;
mod table;
mod tree;

pub use error::ExtractionError;
pub use extractor::ConceptExtractor;
pub use filter::filter_concepts;
pub use result::{ConceptCategory, ConceptSets, ExtractionResult};
pub use table::{
    ClassificationTable, TableExtension, REFERENCE_CALL_KINDS, REFERENCE_CONTROL_STRUCTURES,
    REFERENCE_IDENTIFIER_KINDS, REFERENCE_KEYWORDS, REFERENCE_LITERAL_KINDS,
    REFERENCE_OPERATOR_FIELDS,
};
pub use tree::{SourceBuffer, SyntaxNode};
