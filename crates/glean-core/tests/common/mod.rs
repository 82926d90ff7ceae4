//! In-memory syntax trees for exercising the extractor without a parser.

#![allow(dead_code)]

use std::ops::Range;

use glean_core::concepts::SyntaxNode;

struct ArenaNode {
    tag: String,
    range: Range<usize>,
    children: Vec<usize>,
    fields: Vec<(String, usize)>,
}

/// Flat storage for a tree; nodes refer to each other by index.
pub struct Arena {
    nodes: Vec<ArenaNode>,
}

impl Arena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node and return its index.
    pub fn node(&mut self, tag: &str, range: Range<usize>, children: &[usize]) -> usize {
        self.nodes.push(ArenaNode {
            tag: tag.to_string(),
            range,
            children: children.to_vec(),
            fields: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Append `child` to the children of `parent`.
    pub fn push_child(&mut self, parent: usize, child: usize) {
        self.nodes[parent].children.push(child);
    }

    /// Mark an existing child of `parent` as filling the `name` role.
    pub fn field(&mut self, parent: usize, name: &str, child: usize) {
        self.nodes[parent].fields.push((name.to_string(), child));
    }

    pub fn get(&self, id: usize) -> NodeRef<'_> {
        NodeRef { arena: self, id }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    arena: &'a Arena,
    pub id: usize,
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a ArenaNode {
        &self.arena.nodes[self.id]
    }
}

impl<'a> SyntaxNode for NodeRef<'a> {
    fn type_tag(&self) -> &str {
        &self.data().tag
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&id| self.arena.get(id))
            .collect()
    }

    fn named_field(&self, name: &str) -> Option<Self> {
        self.data()
            .fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|&(_, id)| self.arena.get(id))
    }

    fn byte_span(&self) -> Range<usize> {
        self.data().range.clone()
    }
}

/// Byte range of the first occurrence of `needle` at or after `from`.
pub fn span_of(source: &str, needle: &str, from: usize) -> Range<usize> {
    let start = source[from..]
        .find(needle)
        .map(|i| i + from)
        .unwrap_or_else(|| panic!("`{}` not found in `{}`", needle, source));
    start..start + needle.len()
}
