//! Hardcoded Waypoint Detection
//!
//! Flags submissions that replay a precomputed racing line instead of
//! deriving it from live telemetry. A file is flagged when the number of
//! literal coordinate pairs (or literal lists of them) in its comment-free
//! text is strictly above a threshold.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! application/     (WaypointAuditUseCase - batch entry point)
//!       ↓
//! domain/          (PatternSet, WaypointScan, WaypointFlag)
//!       ↓
//! infrastructure/  (RegexWaypointDetector)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rewardscan_core::features::waypoint_detection::detect_hardcoded_waypoints;
//!
//! let scan = detect_hardcoded_waypoints("for wp in waypoints[i]: pass", 5);
//! assert!(!scan.flagged);
//! assert!(scan.matches.is_empty());
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    WaypointAuditInput, WaypointAuditOutput, WaypointAuditStats, WaypointAuditUseCase,
    WaypointAuditUseCaseImpl,
};
pub use domain::{PatternSet, WaypointFlag, WaypointScan, EXCLUDED_PREFIXES};

#[doc(hidden)]
pub use infrastructure::{RegexWaypointDetector, WaypointDetector};

/// Scan already-normalized text with the standard pattern set
pub fn detect_hardcoded_waypoints(text: &str, threshold: i64) -> WaypointScan {
    RegexWaypointDetector::default().scan(text, threshold)
}
