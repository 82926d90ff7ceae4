//! Parsing front-end: turns source text into tree-sitter syntax trees.
//!
//! ## Components
//!
//! - `Grammar` - A tree-sitter language plus identifiers, extensions and profile
//! - `GrammarRegistry` - Maps language identifiers and extensions to grammars
//! - `ParsedSource` - A tree and the grammar that produced it
//!
//! ## Supported Languages
//!
//! C, C++, C#, Go, Java, JavaScript, Python, Rust, TypeScript and TSX.

pub mod builtin;
mod grammar;
mod registry;

pub use grammar::Grammar;
pub use registry::{GrammarRegistry, ParsedSource};
