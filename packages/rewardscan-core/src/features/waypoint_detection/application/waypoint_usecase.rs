//! Waypoint Audit UseCase Implementation

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::features::normalization::strip_comments;
use crate::features::waypoint_detection::domain::{PatternSet, WaypointFlag};
use crate::features::waypoint_detection::infrastructure::{RegexWaypointDetector, WaypointDetector};
use crate::shared::models::SubmissionGroup;

/// Input for a waypoint audit
pub struct WaypointAuditInput<'a> {
    pub groups: &'a [SubmissionGroup],
    pub threshold: i64,
}

/// Output from a waypoint audit
#[derive(Debug, Clone)]
pub struct WaypointAuditOutput {
    pub flags: Vec<WaypointFlag>,
    pub stats: WaypointAuditStats,
}

/// Waypoint audit statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointAuditStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub files_flagged: usize,
    pub execution_time_ms: u64,
}

/// Waypoint Audit UseCase Trait
pub trait WaypointAuditUseCase: Send + Sync {
    /// Scan every retrievable file, flagging those above the threshold
    fn audit(&self, input: WaypointAuditInput) -> WaypointAuditOutput;
}

/// Waypoint Audit UseCase Implementation
#[derive(Debug, Default)]
pub struct WaypointAuditUseCaseImpl {
    detector: RegexWaypointDetector,
}

impl WaypointAuditUseCaseImpl {
    pub fn new(pattern_set: PatternSet) -> Self {
        Self {
            detector: RegexWaypointDetector::new(pattern_set),
        }
    }
}

impl WaypointAuditUseCase for WaypointAuditUseCaseImpl {
    fn audit(&self, input: WaypointAuditInput) -> WaypointAuditOutput {
        let start = std::time::Instant::now();
        let mut stats = WaypointAuditStats::default();
        let mut flags = Vec::new();

        for file in input.groups.iter().flat_map(|g| g.files.iter()) {
            let Some(content) = file.usable_content() else {
                stats.files_skipped += 1;
                continue;
            };
            stats.files_scanned += 1;

            let scan = self
                .detector
                .scan(&strip_comments(content), input.threshold);
            if scan.flagged {
                debug!(
                    "{}: {} literal coordinates (threshold {})",
                    file.identifier(),
                    scan.count(),
                    input.threshold
                );
                flags.push(WaypointFlag::new(file.identifier(), content, scan));
            }
        }

        stats.files_flagged = flags.len();
        stats.execution_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "waypoint audit: {} scanned, {} flagged, {} skipped ({})",
            stats.files_scanned,
            stats.files_flagged,
            stats.files_skipped,
            self.detector.name()
        );

        WaypointAuditOutput { flags, stats }
    }
}
