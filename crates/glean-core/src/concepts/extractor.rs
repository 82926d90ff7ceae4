//! Single-pass concept extraction over a syntax tree.

use super::error::ExtractionError;
use super::result::{ConceptCategory, ConceptSets};
use super::table::ClassificationTable;
use super::tree::{SourceBuffer, SyntaxNode};

/// Walks a tree once and classifies every node against a table.
///
/// Stateless between calls; one extractor can serve any number of trees,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ConceptExtractor {
    table: ClassificationTable,
}

impl ConceptExtractor {
    pub fn new(table: ClassificationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }

    /// Classify every node reachable from `root`.
    ///
    /// The walk is pre-order and iterative, so arbitrarily deep trees cannot
    /// overflow the stack. On error nothing is returned.
    pub fn extract<N: SyntaxNode>(
        &self,
        root: N,
        source: SourceBuffer<'_>,
    ) -> Result<ConceptSets, ExtractionError> {
        let mut concepts = ConceptSets::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            let children = node.child_nodes();
            self.classify(&node, &children, source, &mut concepts)?;
            // Reversed so the leftmost child is visited next.
            stack.extend(children.into_iter().rev());
        }

        Ok(concepts)
    }

    fn classify<N: SyntaxNode>(
        &self,
        node: &N,
        children: &[N],
        source: SourceBuffer<'_>,
        concepts: &mut ConceptSets,
    ) -> Result<(), ExtractionError> {
        let tag = node.type_tag();

        if self.table.is_control_structure(tag) {
            concepts.insert(ConceptCategory::ControlStructures, tag);
        }

        if self.table.is_call(tag) {
            let callee = self
                .table
                .callee_fields()
                .iter()
                .find_map(|field| node.named_field(field));
            match callee {
                Some(callee) => {
                    if self.names_callee(&callee) {
                        concepts.insert(ConceptCategory::FunctionCalls, source.text(&callee)?);
                    }
                }
                None => {
                    for child in children.iter().filter(|c| self.names_callee(*c)) {
                        concepts.insert(ConceptCategory::FunctionCalls, source.text(child)?);
                    }
                }
            }
        }

        for field in self.table.operator_fields() {
            if let Some(op) = node.named_field(field) {
                concepts.insert(ConceptCategory::Operators, source.text(&op)?);
            }
        }

        if node.is_named() && self.table.is_identifier(tag) {
            concepts.insert(ConceptCategory::Identifiers, source.text(node)?);
        }

        if node.is_named() && self.table.is_literal(tag) {
            concepts.insert(ConceptCategory::Literals, source.text(node)?);
        }

        if self.table.is_keyword(tag) {
            concepts.insert(ConceptCategory::Keywords, tag);
        }

        Ok(())
    }

    fn names_callee<N: SyntaxNode>(&self, node: &N) -> bool {
        node.is_named() && self.table.is_identifier(node.type_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::table::TableExtension;

    fn extract_c(source: &str) -> ConceptSets {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_c::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        ConceptExtractor::default()
            .extract(tree.root_node(), SourceBuffer::from(source))
            .unwrap()
    }

    fn values(concepts: &ConceptSets, category: ConceptCategory) -> Vec<&str> {
        concepts.get(category).iter().map(String::as_str).collect()
    }

    #[test]
    fn test_if_statement_with_call() {
        let concepts = extract_c("if (x > 0) { f(x); }");

        assert_eq!(values(&concepts, ConceptCategory::ControlStructures), ["if_statement"]);
        assert_eq!(values(&concepts, ConceptCategory::Keywords), ["if"]);
        assert_eq!(values(&concepts, ConceptCategory::Operators), [">"]);
        assert_eq!(values(&concepts, ConceptCategory::Identifiers), ["f", "x"]);
        assert_eq!(values(&concepts, ConceptCategory::FunctionCalls), ["f"]);
        assert_eq!(values(&concepts, ConceptCategory::Literals), ["0"]);
    }

    #[test]
    fn test_nested_calls_only_count_direct_identifiers() {
        let concepts = extract_c("int main() { return g(h(1), \"s\", 'c'); }");

        assert_eq!(values(&concepts, ConceptCategory::FunctionCalls), ["g", "h"]);
        assert_eq!(values(&concepts, ConceptCategory::Literals), ["\"s\"", "'c'", "1"]);
        assert_eq!(values(&concepts, ConceptCategory::Keywords), ["return"]);
        assert!(values(&concepts, ConceptCategory::Identifiers).contains(&"main"));
    }

    #[test]
    fn test_unary_and_assignment_operators() {
        let concepts = extract_c("void f() { a += -b; }");
        let operators = values(&concepts, ConceptCategory::Operators);
        assert!(operators.contains(&"+="));
        assert!(operators.contains(&"-"));
    }

    #[test]
    fn test_loops_and_switch() {
        let concepts = extract_c(
            "void f(int n) { for (;;) { break; } while (n) { continue; } switch (n) { case 1: break; default: break; } }",
        );
        assert_eq!(
            values(&concepts, ConceptCategory::ControlStructures),
            ["for_statement", "switch_statement", "while_statement"]
        );
        assert_eq!(
            values(&concepts, ConceptCategory::Keywords),
            ["break", "case", "continue", "default", "for", "switch", "while"]
        );
    }

    #[test]
    fn test_extension_is_honoured() {
        let extension = TableExtension {
            control_structures: vec!["do_statement".to_string()],
            keywords: vec!["do".to_string()],
            ..Default::default()
        };
        let extractor = ConceptExtractor::new(ClassificationTable::reference().with(&extension));

        let source = "void f() { do { } while (1); }";
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_c::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        let concepts = extractor
            .extract(tree.root_node(), SourceBuffer::from(source))
            .unwrap();

        assert_eq!(values(&concepts, ConceptCategory::ControlStructures), ["do_statement"]);
        assert_eq!(values(&concepts, ConceptCategory::Keywords), ["do", "while"]);
    }

    #[test]
    fn test_empty_source() {
        let concepts = extract_c("");
        assert_eq!(concepts.total(), 0);
    }
}
