//! Grammar registry mapping language identifiers to tree-sitter grammars.

use std::collections::HashMap;
use std::sync::Arc;

use tree_sitter::{Node, Tree};

use super::builtin::builtin_grammars;
use super::grammar::Grammar;
use crate::error::AnalysisError;

/// A parsed tree together with the grammar that produced it.
#[derive(Debug)]
pub struct ParsedSource {
    pub grammar: Arc<Grammar>,
    pub tree: Tree,
}

impl ParsedSource {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Whether the tree contains `ERROR` or `MISSING` nodes.
    pub fn has_error(&self) -> bool {
        self.root().has_error()
    }
}

/// Registry of grammars.
///
/// Lookups by identifier, alias or file extension are case-insensitive.
/// Automatically registers all built-in grammars on creation.
pub struct GrammarRegistry {
    /// Canonical name and alias to grammar mapping.
    by_name: HashMap<String, Arc<Grammar>>,
    /// Extension to grammar mapping.
    by_extension: HashMap<String, Arc<Grammar>>,
}

impl GrammarRegistry {
    /// Create a new registry with all built-in grammars.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for grammar in builtin_grammars() {
            registry.register(Arc::new(grammar));
        }
        registry
    }

    /// Create a registry without any grammars.
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
            by_extension: HashMap::new(),
        }
    }

    /// Register a grammar under its name, aliases and extensions.
    pub fn register(&mut self, grammar: Arc<Grammar>) {
        self.by_name
            .insert(grammar.name().to_lowercase(), Arc::clone(&grammar));
        for alias in grammar.aliases() {
            self.by_name
                .insert(alias.to_lowercase(), Arc::clone(&grammar));
        }
        for ext in grammar.extensions() {
            self.by_extension
                .insert(ext.to_lowercase(), Arc::clone(&grammar));
        }
    }

    /// Get a grammar by identifier or alias.
    pub fn grammar(&self, language: &str) -> Option<Arc<Grammar>> {
        self.by_name.get(&language.trim().to_lowercase()).cloned()
    }

    /// Get a grammar for the given file extension.
    pub fn grammar_for_extension(&self, extension: &str) -> Option<Arc<Grammar>> {
        self.by_extension.get(&extension.to_lowercase()).cloned()
    }

    /// Get a grammar for the given file path.
    pub fn grammar_for_path(&self, path: &str) -> Option<Arc<Grammar>> {
        std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.grammar_for_extension(ext))
    }

    /// Check if the identifier or alias is known.
    pub fn supports(&self, language: &str) -> bool {
        self.grammar(language).is_some()
    }

    /// Canonical identifiers of all registered grammars, sorted.
    pub fn languages(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.by_name.values().map(|g| g.name()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Parse `code` with the grammar registered for `language`.
    pub fn parse(&self, language: &str, code: &str) -> Result<ParsedSource, AnalysisError> {
        let grammar = self
            .grammar(language)
            .ok_or_else(|| AnalysisError::unsupported(language))?;
        let tree = grammar.parse_tree(code)?;

        Ok(ParsedSource { grammar, tree })
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}
