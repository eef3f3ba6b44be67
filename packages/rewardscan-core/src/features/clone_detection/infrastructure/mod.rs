//! Plagiarism detection infrastructure (scorers)

pub mod tree_similarity;

pub use tree_similarity::{count_matches, count_nodes, TreeSimilarityScorer};

use crate::features::clone_detection::domain::SimilarityOutcome;

/// Pairwise similarity scorer trait
pub trait SimilarityScorer: Send + Sync {
    /// Get scorer name
    fn name(&self) -> &'static str;

    /// Score two raw source texts
    fn similarity(&self, left: &str, right: &str) -> SimilarityOutcome;
}
