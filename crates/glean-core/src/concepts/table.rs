//! Static classification table mapping node type tags to concept categories.
//!
//! The table has one entry per rule rather than one per category, because the
//! rules differ in *what* they record: control structures and keywords record
//! the node's type tag, everything else records source text.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Control-structure productions of the reference table.
pub const REFERENCE_CONTROL_STRUCTURES: &[&str] = &[
    "if_statement",
    "for_statement",
    "while_statement",
    "switch_statement",
];

/// Call productions whose identifier children name the callee.
pub const REFERENCE_CALL_KINDS: &[&str] = &["call_expression", "function_call"];

/// Field names whose node text is an operator.
pub const REFERENCE_OPERATOR_FIELDS: &[&str] = &["operator"];

/// Identifier token kinds.
pub const REFERENCE_IDENTIFIER_KINDS: &[&str] = &["identifier"];

/// Literal productions.
pub const REFERENCE_LITERAL_KINDS: &[&str] = &["number_literal", "string_literal", "char_literal"];

/// Leaf tokens reported as keywords.
pub const REFERENCE_KEYWORDS: &[&str] = &[
    "for", "if", "else", "return", "while", "switch", "case", "default", "break", "continue",
];

/// Tag sets driving classification.
///
/// Lookups are by exact type tag; a tag missing from every set is simply not
/// classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
    control_structures: BTreeSet<String>,
    call_kinds: BTreeSet<String>,
    callee_fields: Vec<String>,
    operator_fields: Vec<String>,
    identifier_kinds: BTreeSet<String>,
    literal_kinds: BTreeSet<String>,
    keywords: BTreeSet<String>,
}

impl ClassificationTable {
    /// The reference table, shared by every grammar.
    pub fn reference() -> Self {
        Self {
            control_structures: to_set(REFERENCE_CONTROL_STRUCTURES),
            call_kinds: to_set(REFERENCE_CALL_KINDS),
            callee_fields: Vec::new(),
            operator_fields: REFERENCE_OPERATOR_FIELDS.iter().map(|s| s.to_string()).collect(),
            identifier_kinds: to_set(REFERENCE_IDENTIFIER_KINDS),
            literal_kinds: to_set(REFERENCE_LITERAL_KINDS),
            keywords: to_set(REFERENCE_KEYWORDS),
        }
    }

    /// Add the tags of an extension. Existing entries are never removed.
    pub fn extend(&mut self, extension: &TableExtension) {
        self.control_structures
            .extend(extension.control_structures.iter().cloned());
        self.call_kinds.extend(extension.function_calls.iter().cloned());
        push_unique(&mut self.callee_fields, &extension.callee_fields);
        push_unique(&mut self.operator_fields, &extension.operator_fields);
        self.identifier_kinds
            .extend(extension.identifiers.iter().cloned());
        self.literal_kinds.extend(extension.literals.iter().cloned());
        self.keywords.extend(extension.keywords.iter().cloned());
    }

    /// Builder-style [`extend`](Self::extend).
    pub fn with(mut self, extension: &TableExtension) -> Self {
        self.extend(extension);
        self
    }

    pub fn is_control_structure(&self, tag: &str) -> bool {
        self.control_structures.contains(tag)
    }

    pub fn is_call(&self, tag: &str) -> bool {
        self.call_kinds.contains(tag)
    }

    pub fn is_identifier(&self, tag: &str) -> bool {
        self.identifier_kinds.contains(tag)
    }

    pub fn is_literal(&self, tag: &str) -> bool {
        self.literal_kinds.contains(tag)
    }

    pub fn is_keyword(&self, tag: &str) -> bool {
        self.keywords.contains(tag)
    }

    /// Field names that hold a call's callee, in lookup order.
    ///
    /// Empty in the reference table. When a call node has one of these
    /// fields, only that child names the callee; otherwise every identifier
    /// child does.
    pub fn callee_fields(&self) -> &[String] {
        &self.callee_fields
    }

    /// Field names probed for operators, in lookup order.
    pub fn operator_fields(&self) -> &[String] {
        &self.operator_fields
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::reference()
    }
}

/// Extra tags layered on top of the reference table.
///
/// Used both for per-grammar language profiles and for the
/// `[extraction.extra]` configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableExtension {
    pub control_structures: Vec<String>,
    pub function_calls: Vec<String>,
    pub callee_fields: Vec<String>,
    pub operator_fields: Vec<String>,
    pub identifiers: Vec<String>,
    pub literals: Vec<String>,
    pub keywords: Vec<String>,
}

impl TableExtension {
    pub fn is_empty(&self) -> bool {
        self.control_structures.is_empty()
            && self.function_calls.is_empty()
            && self.callee_fields.is_empty()
            && self.operator_fields.is_empty()
            && self.identifiers.is_empty()
            && self.literals.is_empty()
            && self.keywords.is_empty()
    }
}

fn to_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|s| s.to_string()).collect()
}

fn push_unique(fields: &mut Vec<String>, extra: &[String]) {
    for field in extra {
        if !fields.contains(field) {
            fields.push(field.clone());
        }
    }
}
