//! Tree-sitter grammars known to the front-end.

use tree_sitter::{Language, Parser as TSParser, Tree};

use crate::concepts::TableExtension;
use crate::error::AnalysisError;

/// A tree-sitter grammar together with the metadata used to select it.
pub struct Grammar {
    language: Language,
    name: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    extensions: &'static [&'static str],
    profile: TableExtension,
}

impl Grammar {
    pub fn new(
        language: Language,
        name: &'static str,
        display_name: &'static str,
        extensions: &'static [&'static str],
    ) -> Self {
        Self {
            language,
            name,
            display_name,
            aliases: &[],
            extensions,
            profile: TableExtension::default(),
        }
    }

    /// Alternative identifiers accepted for this grammar.
    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Grammar-specific additions to the classification table.
    pub fn with_profile(mut self, profile: TableExtension) -> Self {
        self.profile = profile;
        self
    }

    /// Canonical identifier, e.g. `c_sharp`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable language name, e.g. `C#`.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn aliases(&self) -> &[&'static str] {
        self.aliases
    }

    pub fn extensions(&self) -> &[&'static str] {
        self.extensions
    }

    pub fn profile(&self) -> &TableExtension {
        &self.profile
    }

    /// Parse source code into a tree-sitter tree.
    ///
    /// A tree that contains `ERROR` nodes is still a successful parse.
    pub fn parse_tree(&self, content: &str) -> Result<Tree, AnalysisError> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| AnalysisError::parse(self.name, format!("Failed to set language: {}", e)))?;

        parser
            .parse(content, None)
            .ok_or_else(|| AnalysisError::parse(self.name, "Parser produced no tree"))
    }
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("aliases", &self.aliases)
            .field("extensions", &self.extensions)
            .finish()
    }
}
