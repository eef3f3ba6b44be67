//! End-to-end audit over a submission directory

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use rewardscan_core::config::AuditConfig;
use rewardscan_core::usecases::{AuditReport, AuditScope, AuditService};
use rewardscan_storage::{FilesystemStore, JsonReportSink, KeyFilter, ResultSink};

fn config() -> AuditConfig {
    AuditConfig::default()
        .waypoint_threshold(10)
        .filter(
            KeyFilter::default()
                .with_key_contains("MUDR")
                .with_key_suffix("reward_function.py"),
        )
}

#[test]
fn test_identical_submissions_across_teams() {
    let root = submission_tree(&[
        ("team-a", "MUDR-1/reward_function.py", REWARD_SPEED),
        ("team-b", "MUDR-7/reward_function.py", REWARD_SPEED),
        ("team-b", "MUDR-7/notes.md", "# not a submission"),
        ("team-c", "MUDR-2/reward_function.py", REWARD_CENTERLINE),
    ]);

    let store = FilesystemStore::grouped(root.path()).unwrap();
    let report = AuditService::new(config())
        .run_on(&store, AuditScope::Plagiarism)
        .unwrap();

    assert_eq!(report.stats.groups, 3);
    assert_eq!(report.stats.files, 3);
    assert_eq!(report.matches.len(), 1);

    let record = &report.matches[0];
    assert_eq!(record.left_identifier(), "team-a/MUDR-1/reward_function.py");
    assert_eq!(record.right_identifier(), "team-b/MUDR-7/reward_function.py");
    assert_eq!(record.similarity_percentage, 100.0);
}

#[test]
fn test_full_audit_report_roundtrips_through_json_sink() {
    let root = submission_tree(&[
        ("team-a", "MUDR/reward_function.py", &reward_with_waypoints(15)),
        ("team-b", "MUDR/reward_function.py", REWARD_DYNAMIC_WAYPOINTS),
    ]);

    let store = FilesystemStore::grouped(root.path()).unwrap();
    let report = AuditService::new(config())
        .run_on(&store, AuditScope::Full)
        .unwrap();

    assert_eq!(report.waypoint_flags.len(), 1);
    assert_eq!(report.waypoint_flags[0].file, "team-a/MUDR/reward_function.py");
    assert_eq!(report.waypoint_flags[0].match_count, 15);

    let out = root.path().join("report.json");
    JsonReportSink::create(&out)
        .and_then(|mut sink| sink.write_report(&report))
        .unwrap();

    let loaded: AuditReport =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn test_missing_root_is_a_configuration_error() {
    let root = submission_tree(&[]);
    let result = FilesystemStore::grouped(root.path().join("does-not-exist"));
    assert!(result.is_err());
}
