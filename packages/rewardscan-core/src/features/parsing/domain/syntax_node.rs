//! Syntax node representation
//!
//! Abstracts tree-sitter nodes for use in domain logic. Only the node kind,
//! leaf token text and child order are kept; that is all structural
//! comparison looks at.

use crate::shared::models::Span;

/// Syntax tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Grammar kind (e.g. `function_definition`, `identifier`, `(`)
    pub kind: &'static str,
    pub span: Span,

    /// Token text, leaves only
    pub text: Option<String>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: &'static str, span: Span) -> Self {
        Self {
            kind,
            span,
            text: None,
            children: Vec::new(),
        }
    }

    /// Leaf token node
    pub fn leaf(kind: &'static str, text: impl Into<String>) -> Self {
        Self::new(kind, Span::zero()).with_text(text)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether two nodes carry the same label
    ///
    /// Interior nodes are labelled by kind alone, leaves by kind and token
    /// text.
    pub fn same_label(&self, other: &SyntaxNode) -> bool {
        self.kind == other.kind && self.text == other.text
    }

    /// Get text content
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl Drop for SyntaxNode {
    // Release descendants from a flat worklist so deep nesting cannot
    // exhaust the stack
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
