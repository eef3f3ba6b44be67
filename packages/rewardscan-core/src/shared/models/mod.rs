//! Shared models

mod source_file;
mod span;

pub use crate::errors::{Result, RewardscanError};
pub use source_file::{SourceFile, SubmissionGroup};
pub use span::Span;
