//! Integration tests for hardcoded waypoint detection

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use rewardscan_core::features::waypoint_detection::{
    detect_hardcoded_waypoints, PatternSet, WaypointAuditInput, WaypointAuditUseCase,
    WaypointAuditUseCaseImpl,
};
use rewardscan_core::shared::models::SubmissionGroup;
use rewardscan_core::strip_comments;

#[test]
fn test_eleven_literal_pairs_over_ten() {
    let text = "(1.0, 2.0)\n".repeat(11);
    let scan = detect_hardcoded_waypoints(&text, 10);
    assert!(scan.flagged);
    assert_eq!(scan.count(), 11);

    let text = "(1.0, 2.0)\n".repeat(10);
    assert!(!detect_hardcoded_waypoints(&text, 10).flagged);
}

#[test]
fn test_dynamic_waypoint_usage_not_flagged() {
    let scan = detect_hardcoded_waypoints(&strip_comments(REWARD_DYNAMIC_WAYPOINTS), 0);
    assert!(!scan.flagged);
    assert!(scan.matches.is_empty());
}

#[test]
fn test_audit_reports_flagged_files_in_input_order() {
    let groups = vec![
        SubmissionGroup::new("B").with_file("reward_function.py", reward_with_waypoints(12)),
        SubmissionGroup::new("A")
            .with_file("reward_function.py", REWARD_SPEED)
            .with_file("old/reward_function.py", reward_with_waypoints(11))
            .with_missing_file("new/reward_function.py"),
    ];

    let output = WaypointAuditUseCaseImpl::default().audit(WaypointAuditInput {
        groups: &groups,
        threshold: 10,
    });

    let flagged: Vec<(&str, usize)> = output
        .flags
        .iter()
        .map(|f| (f.file.as_str(), f.match_count))
        .collect();
    assert_eq!(
        flagged,
        vec![("B/reward_function.py", 12), ("A/old/reward_function.py", 11)]
    );
    assert_eq!(output.flags[1].content, reward_with_waypoints(11));
    assert_eq!(output.stats.files_skipped, 1);
}

#[test]
fn test_literals_inside_docstrings_are_ignored() {
    let source = format!(
        "\"\"\"\nRecorded line:\n{}\"\"\"\n\ndef reward_function(params):\n    return 1.0\n",
        "(1.0, 2.0)\n".repeat(20)
    );
    let groups = vec![SubmissionGroup::new("A").with_file("reward_function.py", source)];

    let output = WaypointAuditUseCaseImpl::default().audit(WaypointAuditInput {
        groups: &groups,
        threshold: 5,
    });
    assert!(output.flags.is_empty());
}

#[test]
fn test_extended_patterns_are_opt_in() {
    let source = "x_coords = [1.0, 2.0, 3.0]\ny_coords = [4.0, 5.0, 6.0]\nspeeds = [1, 2]\n";
    let groups = vec![SubmissionGroup::new("A").with_file("reward_function.py", source)];
    let input = || WaypointAuditInput {
        groups: &groups,
        threshold: 2,
    };

    assert!(WaypointAuditUseCaseImpl::new(PatternSet::Standard)
        .audit(input())
        .flags
        .is_empty());

    let extended = WaypointAuditUseCaseImpl::new(PatternSet::Extended).audit(input());
    assert_eq!(extended.flags.len(), 1);
    assert_eq!(extended.flags[0].match_count, 3);
}
