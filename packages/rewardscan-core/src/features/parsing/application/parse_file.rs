//! Parse file use case

use crate::features::parsing::domain::ParsedTree;
use crate::features::parsing::ports::Parser;
use crate::shared::models::Result;

/// Parse file use case
#[derive(Debug, Clone, Default)]
pub struct ParseFileUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Execute the parse operation
    pub fn execute(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        self.parser.parse(source, file_path)
    }

    /// Parse and keep only trees free of syntax errors
    ///
    /// Returns `None` both when the parser fails and when the source has
    /// error or missing nodes.
    pub fn execute_clean(&self, source: &str, file_path: &str) -> Option<ParsedTree> {
        match self.execute(source, file_path) {
            Ok(tree) if !tree.has_errors() => Some(tree),
            Ok(tree) => {
                if let Some(err) = tree.first_error() {
                    tracing::debug!("{}: {} ({})", file_path, err.message, err.span);
                }
                None
            }
            Err(e) => {
                tracing::debug!("{}: {}", file_path, e);
                None
            }
        }
    }
}
