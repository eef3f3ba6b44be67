//! Waypoint Detection Infrastructure

pub mod regex_detector;

pub use regex_detector::RegexWaypointDetector;

use crate::features::waypoint_detection::domain::WaypointScan;

/// Waypoint detector trait
pub trait WaypointDetector: Send + Sync {
    /// Get detector name
    fn name(&self) -> &'static str;

    /// Count literal coordinates in already-normalized `text`
    fn scan(&self, text: &str, threshold: i64) -> WaypointScan;
}
