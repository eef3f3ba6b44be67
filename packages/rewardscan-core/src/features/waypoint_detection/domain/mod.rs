//! Waypoint Detection Domain Models
//!
//! - `pattern_set.rs`   # which literal shapes are counted
//! - `waypoint_flag.rs` # scan verdicts and flagged-file records

pub mod pattern_set;
pub mod waypoint_flag;

pub use pattern_set::{PatternSet, EXCLUDED_PREFIXES};
pub use waypoint_flag::{WaypointFlag, WaypointScan};
