//! Parsing Feature
//!
//! Turns submitted Python source into language-structural syntax trees.
//!
//! ## Structure
//! - `domain/` - ParsedTree, SyntaxNode models
//! - `ports/` - Parser trait
//! - `application/` - ParseFileUseCase
//! - `infrastructure/` - TreeSitterParser

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::ParseFileUseCase;
pub use domain::{ParseError, ParsedTree, SyntaxNode};
pub use ports::Parser;

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::TreeSitterParser;
