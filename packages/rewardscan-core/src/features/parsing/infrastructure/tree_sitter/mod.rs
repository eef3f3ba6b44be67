//! Tree-sitter backend

mod parser;

pub use parser::{TreeSitterLanguage, TreeSitterParser};
