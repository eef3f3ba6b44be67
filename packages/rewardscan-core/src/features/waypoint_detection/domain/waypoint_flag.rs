//! Scan verdicts

use serde::{Deserialize, Serialize};

/// Result of scanning one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointScan {
    /// `matches.len() > threshold`
    pub flagged: bool,

    /// Every counted literal, in source order
    pub matches: Vec<String>,
}

impl WaypointScan {
    pub fn from_matches(matches: Vec<String>, threshold: i64) -> Self {
        let flagged = i64::try_from(matches.len()).map_or(true, |count| count > threshold);
        Self { flagged, matches }
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

/// A submission flagged for hardcoded waypoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointFlag {
    /// `group/file` identifier
    pub file: String,

    /// Original (un-normalized) content
    pub content: String,

    /// Number of counted literals
    pub match_count: usize,

    /// The literals themselves
    pub matches: Vec<String>,
}

impl WaypointFlag {
    pub fn new(file: impl Into<String>, content: impl Into<String>, scan: WaypointScan) -> Self {
        Self {
            file: file.into(),
            content: content.into(),
            match_count: scan.count(),
            matches: scan.matches,
        }
    }
}
