/*
 * Rewardscan Core - reward-function submission auditing
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (SourceFile, SubmissionGroup, Span)
 * - config/      : AuditConfig, YAML v1 loading, threshold parsing
 * - features/    : Vertical slices (normalization → waypoint_detection,
 *                  parsing → clone_detection)
 * - usecases/    : Batch runs over the storage ports
 *
 * Performance:
 * - Each submission parsed once per run
 * - Optional Rayon fan-out of pair comparisons, order preserved
 */

#![allow(clippy::needless_range_loop)] // Index loops mirror the pair enumeration order
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration (defaults, YAML, operator thresholds)
pub mod config;

/// Crate error type
pub mod errors;

/// Analysis features
pub mod features;

/// Shared models
pub mod shared;

/// Batch audit usecases
pub mod usecases;

pub use config::{parse_count_threshold, parse_threshold, AuditConfig, ConfigError};
pub use errors::{Result, RewardscanError};
pub use features::clone_detection::{MatchMethod, MatchRecord, SimilarityOutcome, TextualFallback};
pub use features::normalization::strip_comments;
pub use features::waypoint_detection::{detect_hardcoded_waypoints, PatternSet, WaypointFlag};
pub use shared::models::{SourceFile, SubmissionGroup};
pub use usecases::{AuditReport, AuditScope, AuditService};

use features::clone_detection::{SimilarityScorer, TreeSimilarityScorer};

/// Structural similarity of two Python sources
///
/// Invalid syntax on either side yields `SimilarityOutcome::ParseFailure`,
/// whose `percentage()` is 0.
pub fn similarity(left: &str, right: &str) -> SimilarityOutcome {
    TreeSimilarityScorer::python().similarity(left, right)
}
