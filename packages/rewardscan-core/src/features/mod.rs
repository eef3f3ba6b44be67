//! Analysis features
//!
//! - `normalization` - comment and docstring stripping
//! - `waypoint_detection` - hardcoded racing-line literals
//! - `parsing` - tree-sitter syntax trees
//! - `clone_detection` - cross-group structural similarity

pub mod clone_detection;
pub mod normalization;
pub mod parsing;
pub mod waypoint_detection;
