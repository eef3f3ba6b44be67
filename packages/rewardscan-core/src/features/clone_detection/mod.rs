//! Cross-Group Plagiarism Detection
//!
//! Structural near-duplicate detection between submissions of different
//! groups, scored by lockstep syntax-tree matching.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! application/     (PlagiarismUseCase - pairwise driver)
//!       ↓
//! domain/          (MatchRecord, SimilarityOutcome, metrics)
//!       ↓
//! infrastructure/  (TreeSimilarityScorer)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rewardscan_core::features::clone_detection::{
//!     ComparisonInput, ComparisonOptions, PlagiarismUseCase, PlagiarismUseCaseImpl,
//! };
//! use rewardscan_core::shared::models::SubmissionGroup;
//!
//! let groups = vec![
//!     SubmissionGroup::new("team-a").with_file("reward_function.py", "return 1.0\n"),
//!     SubmissionGroup::new("team-b").with_file("reward_function.py", "return 1.0\n"),
//! ];
//!
//! let usecase = PlagiarismUseCaseImpl::new(ComparisonOptions::sequential());
//! let output = usecase.compare(ComparisonInput { groups: &groups, threshold: 80.0 });
//! assert_eq!(output.matches.len(), 1);
//! assert_eq!(output.matches[0].similarity_percentage, 100.0);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    ComparisonInput, ComparisonOutput, ComparisonStats, PlagiarismUseCase, PlagiarismUseCaseImpl,
};
pub use domain::{
    dice_percentage, ratcliff_obershelp_ratio, text_ratio, ComparisonOptions, MatchMethod,
    MatchRecord, ParseSide, SimilarityOutcome, TextualFallback,
};

#[doc(hidden)]
pub use infrastructure::{count_matches, count_nodes, SimilarityScorer, TreeSimilarityScorer};
