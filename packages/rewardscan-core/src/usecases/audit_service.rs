//! Audit Service - one batch run over all submissions
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use rewardscan_core::config::AuditConfig;
//! use rewardscan_core::usecases::{AuditScope, AuditService};
//! use rewardscan_storage::FilesystemStore;
//!
//! let store = FilesystemStore::grouped("./submissions")?;
//! let service = AuditService::new(AuditConfig::default().waypoint_threshold(10));
//! let report = service.run_on(&store, AuditScope::Full)?;
//! println!("{} matches, {} flags", report.matches.len(), report.waypoint_flags.len());
//! ```

use chrono::{DateTime, Utc};
use rewardscan_storage::{ContentProvider, GroupEnumerator};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::submission_loader::SubmissionLoader;
use crate::config::AuditConfig;
use crate::errors::Result;
use crate::features::clone_detection::{
    ComparisonInput, ComparisonOptions, ComparisonOutput, MatchRecord, PlagiarismUseCase,
    PlagiarismUseCaseImpl,
};
use crate::features::waypoint_detection::{
    WaypointAuditInput, WaypointAuditOutput, WaypointAuditUseCase, WaypointAuditUseCaseImpl,
    WaypointFlag,
};
use crate::shared::models::SubmissionGroup;

/// Which checks a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditScope {
    Waypoints,
    Plagiarism,
    Full,
}

impl AuditScope {
    fn waypoints(self) -> bool {
        matches!(self, AuditScope::Waypoints | AuditScope::Full)
    }

    fn plagiarism(self) -> bool {
        matches!(self, AuditScope::Plagiarism | AuditScope::Full)
    }
}

/// Thresholds a report was produced with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedThresholds {
    pub similarity_threshold: f64,
    pub waypoint_threshold: i64,
}

/// Run statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStats {
    pub groups: usize,
    pub files: usize,
    pub files_unavailable: usize,
    pub files_flagged: usize,
    pub pairs_compared: usize,
    pub pairs_skipped: usize,
    pub parse_failures: usize,
    pub textual_fallbacks: usize,
    pub execution_time_ms: u64,
}

/// Everything one run hands to the result sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub thresholds: AppliedThresholds,
    pub matches: Vec<MatchRecord>,
    pub waypoint_flags: Vec<WaypointFlag>,
    pub stats: AuditStats,
}

impl AuditReport {
    /// Nothing reported
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty() && self.waypoint_flags.is_empty()
    }
}

/// Audit service
#[derive(Debug, Clone, Default)]
pub struct AuditService {
    config: AuditConfig,
}

impl AuditService {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Fetch every filtered submission from `store`
    pub fn load<S>(&self, store: &S) -> Result<Vec<SubmissionGroup>>
    where
        S: GroupEnumerator + ContentProvider,
    {
        SubmissionLoader::new(store, self.config.filter.clone()).load()
    }

    pub fn check_waypoints(&self, groups: &[SubmissionGroup]) -> WaypointAuditOutput {
        WaypointAuditUseCaseImpl::new(self.config.pattern_set).audit(WaypointAuditInput {
            groups,
            threshold: self.config.waypoint_threshold,
        })
    }

    pub fn check_plagiarism(&self, groups: &[SubmissionGroup]) -> ComparisonOutput {
        PlagiarismUseCaseImpl::new(ComparisonOptions::from(&self.config)).compare(
            ComparisonInput {
                groups,
                threshold: self.config.similarity_threshold,
            },
        )
    }

    /// Run the checks in `scope` over already-loaded submissions
    pub fn run(&self, groups: &[SubmissionGroup], scope: AuditScope) -> AuditReport {
        let start = std::time::Instant::now();
        let mut stats = AuditStats {
            groups: groups.len(),
            files: groups.iter().map(SubmissionGroup::len).sum(),
            files_unavailable: groups
                .iter()
                .flat_map(|g| g.files.iter())
                .filter(|f| f.usable_content().is_none())
                .count(),
            ..Default::default()
        };

        let mut waypoint_flags = Vec::new();
        if scope.waypoints() {
            let output = self.check_waypoints(groups);
            stats.files_flagged = output.stats.files_flagged;
            waypoint_flags = output.flags;
        }

        let mut matches = Vec::new();
        if scope.plagiarism() {
            let output = self.check_plagiarism(groups);
            stats.pairs_compared = output.stats.pairs_compared;
            stats.pairs_skipped = output.stats.pairs_skipped;
            stats.parse_failures = output.stats.parse_failures;
            stats.textual_fallbacks = output.stats.textual_fallbacks;
            matches = output.matches;
        }

        stats.execution_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "audit finished: {} groups, {} files, {} matches, {} waypoint flags",
            stats.groups,
            stats.files,
            matches.len(),
            waypoint_flags.len()
        );

        AuditReport {
            generated_at: Utc::now(),
            thresholds: AppliedThresholds {
                similarity_threshold: self.config.similarity_threshold,
                waypoint_threshold: self.config.waypoint_threshold,
            },
            matches,
            waypoint_flags,
            stats,
        }
    }

    /// Load from `store`, then run
    pub fn run_on<S>(&self, store: &S, scope: AuditScope) -> Result<AuditReport>
    where
        S: GroupEnumerator + ContentProvider,
    {
        let groups = self.load(store)?;
        Ok(self.run(&groups, scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewardscan_storage::{KeyFilter, MemoryStore};

    const HARDCODED: &str = "RACING_LINE = [(0.5, 1.0), (2.0, 3.5)]\nA = (1, 2)\nB = (3, 4)\n";

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_file("team-a", "reward_function.py", HARDCODED)
            .with_file("team-b", "reward_function.py", HARDCODED)
            .with_missing_file("team-c", "reward_function.py")
    }

    fn config() -> AuditConfig {
        AuditConfig::default()
            .waypoint_threshold(2)
            .filter(KeyFilter::default().with_key_suffix("reward_function.py"))
    }

    #[test]
    fn test_full_run() {
        let report = AuditService::new(config())
            .run_on(&store(), AuditScope::Full)
            .unwrap();

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].similarity_percentage, 100.0);
        assert_eq!(report.waypoint_flags.len(), 2);
        assert_eq!(report.stats.groups, 3);
        assert_eq!(report.stats.files_unavailable, 1);
        assert_eq!(report.stats.pairs_compared, 1);
        assert_eq!(report.stats.pairs_skipped, 2);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_scope_limits_checks() {
        let service = AuditService::new(config());
        let groups = service.load(&store()).unwrap();

        let waypoints_only = service.run(&groups, AuditScope::Waypoints);
        assert!(waypoints_only.matches.is_empty());
        assert_eq!(waypoints_only.stats.pairs_compared, 0);
        assert_eq!(waypoints_only.waypoint_flags.len(), 2);

        let plagiarism_only = service.run(&groups, AuditScope::Plagiarism);
        assert!(plagiarism_only.waypoint_flags.is_empty());
        assert_eq!(plagiarism_only.matches.len(), 1);
    }

    #[test]
    fn test_report_serializes_thresholds() {
        let report = AuditService::new(config()).run(&[], AuditScope::Full);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["thresholds"]["similarity_threshold"], 80.0);
        assert_eq!(json["thresholds"]["waypoint_threshold"], 2);
        assert!(report.is_clean());
    }
}
