//! Shared module - Common types used across all features
//!
//! No tree-sitter or regex in here.

pub mod models;

// Re-exports for convenience
pub use models::*;
