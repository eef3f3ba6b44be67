//! Code Normalization Feature
//!
//! Removes Python comments and triple-quoted blocks before analysis.
//! Nothing else is rewritten: no identifier renaming, no whitespace folding.

mod comment_stripper;

pub use comment_stripper::strip_comments;
