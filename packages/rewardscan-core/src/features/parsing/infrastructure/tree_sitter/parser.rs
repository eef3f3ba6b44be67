//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser, Tree};

use crate::features::parsing::domain::{ParseError, ParsedTree, SyntaxNode};
use crate::features::parsing::ports::Parser;
use crate::shared::models::{Result, RewardscanError, Span};

/// Tree-sitter based parser
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSitterLanguage {
    Python,
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::python()
    }
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
        }
    }

    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> ParsedTree {
        let root_node = tree.root_node();
        let root = convert_node(&root_node, source);

        let mut errors = Vec::new();
        collect_errors(&root_node, &mut errors);

        ParsedTree::new(root, file_path, self.language_name()).with_errors(errors)
    }
}

fn span_of(node: &Node) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}

/// Node whose children are still being converted
struct Frame<'tree> {
    node: Node<'tree>,
    converted: SyntaxNode,
    next_child: usize,
}

impl<'tree> Frame<'tree> {
    fn open(node: Node<'tree>, source: &str) -> Self {
        let mut converted = SyntaxNode::new(node.kind(), span_of(&node));
        if node.child_count() == 0 {
            converted = converted.with_text(source.get(node.byte_range()).unwrap_or(""));
        }
        Self {
            node,
            converted,
            next_child: 0,
        }
    }

    /// Next child that is not an extra (comment)
    fn next_child(&mut self) -> Option<Node<'tree>> {
        while self.next_child < self.node.child_count() {
            let child = self.node.child(self.next_child);
            self.next_child += 1;
            match child {
                Some(child) if !child.is_extra() => return Some(child),
                _ => {}
            }
        }
        None
    }
}

/// Convert a tree-sitter node to SyntaxNode, dropping extras (comments)
///
/// Walks with an explicit stack; nesting depth is bounded only by memory.
fn convert_node(node: &Node, source: &str) -> SyntaxNode {
    let mut ancestors: Vec<Frame> = Vec::new();
    let mut current = Frame::open(*node, source);

    loop {
        if let Some(child) = current.next_child() {
            ancestors.push(std::mem::replace(&mut current, Frame::open(child, source)));
            continue;
        }
        match ancestors.pop() {
            Some(mut parent) => {
                parent.converted.children.push(current.converted);
                current = parent;
            }
            None => return current.converted,
        }
    }
}

/// Collect error and missing nodes in document order
fn collect_errors(root: &Node, errors: &mut Vec<ParseError>) {
    let mut pending = vec![*root];

    while let Some(node) = pending.pop() {
        if !node.has_error() {
            continue;
        }

        if node.is_error() || node.is_missing() {
            errors.push(ParseError {
                message: format!("Parse error at {:?}", node.kind()),
                span: span_of(&node),
            });
        }

        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                pending.push(child);
            }
        }
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| RewardscanError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| RewardscanError::parse("Failed to parse source code"))?;

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Python => matches!(ext, "py" | "pyi"),
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Python => "python",
        }
    }
}
