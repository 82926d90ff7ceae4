//! Read-only view over a parsed syntax tree.
//!
//! The extractor only talks to trees through [`SyntaxNode`], so any parser
//! that can expose type tags, ordered children, named fields and byte ranges
//! can be analyzed. The tree-sitter implementation lives here as well since
//! it is the one the built-in grammars produce.

use std::ops::Range;

use super::error::ExtractionError;

/// A node of a syntax tree, as seen by the extractor.
///
/// Implementations are cheap handles (tree-sitter nodes are `Copy`, test trees
/// use references), so methods return owned handles.
pub trait SyntaxNode: Clone {
    /// Grammar production or token kind, e.g. `if_statement` or `>`.
    fn type_tag(&self) -> &str;

    /// Children in source order, empty for leaves.
    fn child_nodes(&self) -> Vec<Self>;

    /// Child filling the given semantic role, if any.
    fn named_field(&self, name: &str) -> Option<Self>;

    /// Half-open `[start, end)` byte offsets into the source buffer.
    fn byte_span(&self) -> Range<usize>;

    /// Whether this is a named production rather than an anonymous token.
    ///
    /// Some grammars reuse a production name as a token (TypeScript's
    /// `string` type keyword next to its `string` literal), and only the
    /// named one carries source text worth recording.
    fn is_named(&self) -> bool {
        true
    }
}

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn type_tag(&self) -> &str {
        self.kind()
    }

    fn child_nodes(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        self.children(&mut cursor).collect()
    }

    fn named_field(&self, name: &str) -> Option<Self> {
        self.child_by_field_name(name)
    }

    fn byte_span(&self) -> Range<usize> {
        self.byte_range()
    }

    fn is_named(&self) -> bool {
        tree_sitter::Node::is_named(self)
    }
}

/// The text a tree was built from, indexed by byte offset.
#[derive(Debug, Clone, Copy)]
pub struct SourceBuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> SourceBuffer<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the text covered by a node.
    ///
    /// Fails if the range is outside the buffer or splits a UTF-8 sequence.
    pub fn text<N: SyntaxNode>(&self, node: &N) -> Result<&'a str, ExtractionError> {
        let range = node.byte_span();
        let bytes = self
            .bytes
            .get(range.clone())
            .ok_or_else(|| ExtractionError::out_of_bounds(node.type_tag(), range.clone(), self.len()))?;

        std::str::from_utf8(bytes)
            .map_err(|e| ExtractionError::invalid_utf8(node.type_tag(), range, e))
    }
}

impl<'a> From<&'a str> for SourceBuffer<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for SourceBuffer<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_c(source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_c::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn test_tree_sitter_node_view() {
        let source = "int a = b + 1;";
        let tree = parse_c(source);
        let root = tree.root_node();

        assert_eq!(root.type_tag(), "translation_unit");
        assert_eq!(root.byte_span(), 0..source.len());

        let declaration = root.child_nodes().remove(0);
        assert_eq!(declaration.type_tag(), "declaration");
        assert!(declaration.named_field("nonexistent").is_none());
        assert!(declaration.named_field("type").is_some());
    }

    #[test]
    fn test_source_text_for_node() {
        let source = "int a = b + 1;";
        let tree = parse_c(source);
        let buffer = SourceBuffer::from(source);
        assert_eq!(buffer.text(&tree.root_node()).unwrap(), source);
    }
}
