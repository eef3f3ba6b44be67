//! Parsed tree representation

use super::syntax_node::SyntaxNode;
use crate::shared::models::Span;

/// Parsed syntax tree
#[derive(Debug, Clone)]
pub struct ParsedTree {
    /// Root node of the tree
    pub root: SyntaxNode,

    /// File path (for error messages)
    pub file_path: String,

    /// Language
    pub language: &'static str,

    /// Error and missing nodes found while parsing
    pub errors: Vec<ParseError>,
}

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParsedTree {
    pub fn new(root: SyntaxNode, file_path: impl Into<String>, language: &'static str) -> Self {
        Self {
            root,
            file_path: file_path.into(),
            language,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<ParseError>) -> Self {
        self.errors = errors;
        self
    }

    /// Whether the source contained invalid syntax
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First error location, for log messages
    pub fn first_error(&self) -> Option<&ParseError> {
        self.errors.first()
    }
}
