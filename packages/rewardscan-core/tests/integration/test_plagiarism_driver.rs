//! Integration tests for the pairwise comparison driver

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use rewardscan_core::features::clone_detection::{
    ComparisonInput, ComparisonOptions, MatchMethod, PlagiarismUseCase, PlagiarismUseCaseImpl,
};
use rewardscan_core::shared::models::SubmissionGroup;

fn compare(groups: &[SubmissionGroup], threshold: f64, options: ComparisonOptions) -> Vec<(String, String, f64)> {
    PlagiarismUseCaseImpl::new(options)
        .compare(ComparisonInput { groups, threshold })
        .matches
        .into_iter()
        .map(|m| (m.left_identifier(), m.right_identifier(), m.similarity_percentage))
        .collect()
}

#[test]
fn test_only_the_similar_cross_group_pair_is_reported() {
    let tweaked = reward_speed_tweaked();
    let groups = single_file_groups(&[REWARD_SPEED, &tweaked, REWARD_CENTERLINE]);

    let matches = compare(&groups, 90.0, ComparisonOptions::sequential());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0, "A/reward_function.py");
    assert_eq!(matches[0].1, "B/reward_function.py");
    assert!(matches[0].2 >= 90.0 && matches[0].2 < 100.0);
}

#[test]
fn test_identical_files_in_different_groups_score_100() {
    let groups = single_file_groups(&[REWARD_SPEED, REWARD_SPEED]);

    let output = PlagiarismUseCaseImpl::new(ComparisonOptions::sequential()).compare(ComparisonInput {
        groups: &groups,
        threshold: 80.0,
    });

    assert_eq!(output.matches.len(), 1);
    let record = &output.matches[0];
    assert_eq!(record.similarity_percentage, 100.0);
    assert_eq!(record.method, MatchMethod::Structural);
    assert_eq!(record.left_content, REWARD_SPEED);
    assert_eq!(record.right_content, REWARD_SPEED);
}

#[test]
fn test_same_group_pairs_never_reported() {
    let groups = vec![
        SubmissionGroup::new("A")
            .with_file("v1/reward_function.py", REWARD_SPEED)
            .with_file("v2/reward_function.py", REWARD_SPEED),
        SubmissionGroup::new("B").with_file("reward_function.py", REWARD_CENTERLINE),
    ];

    let matches = compare(&groups, 0.0, ComparisonOptions::sequential());

    // every cross pair is reported at threshold 0, no A~A pair
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|(l, r, _)| l.starts_with("A/") && r.starts_with("B/")));
}

#[test]
fn test_enumeration_order() {
    let groups = vec![
        SubmissionGroup::new("A")
            .with_file("1.py", "pass\n")
            .with_file("2.py", "pass\n"),
        SubmissionGroup::new("B").with_file("3.py", "pass\n"),
        SubmissionGroup::new("C")
            .with_file("4.py", "pass\n")
            .with_file("5.py", "pass\n"),
    ];

    let pairs: Vec<(String, String)> = compare(&groups, 0.0, ComparisonOptions::sequential())
        .into_iter()
        .map(|(l, r, _)| (l, r))
        .collect();

    let expected: Vec<(String, String)> = [
        ("A/1.py", "B/3.py"),
        ("A/2.py", "B/3.py"),
        ("A/1.py", "C/4.py"),
        ("A/1.py", "C/5.py"),
        ("A/2.py", "C/4.py"),
        ("A/2.py", "C/5.py"),
        ("B/3.py", "C/4.py"),
        ("B/3.py", "C/5.py"),
    ]
    .iter()
    .map(|(l, r)| (l.to_string(), r.to_string()))
    .collect();

    assert_eq!(pairs, expected);
}

#[test]
fn test_parallel_matches_sequential() {
    let tweaked = reward_speed_tweaked();
    let groups: Vec<SubmissionGroup> = (0..6)
        .map(|g| {
            let content = match g % 3 {
                0 => REWARD_SPEED,
                1 => tweaked.as_str(),
                _ => REWARD_CENTERLINE,
            };
            SubmissionGroup::new(format!("team-{g}"))
                .with_file("reward_function.py", content)
                .with_file("backup/reward_function.py", REWARD_DYNAMIC_WAYPOINTS)
        })
        .collect();

    let sequential = compare(&groups, 50.0, ComparisonOptions::sequential());
    let parallel = compare(&groups, 50.0, ComparisonOptions::sequential().with_parallel(true));

    assert!(!sequential.is_empty());
    assert_eq!(sequential, parallel);
}

#[test]
fn test_unavailable_content_is_skipped_silently() {
    let groups = vec![
        SubmissionGroup::new("A").with_file("reward_function.py", REWARD_SPEED),
        SubmissionGroup::new("B").with_missing_file("reward_function.py"),
        SubmissionGroup::new("C").with_file("reward_function.py", ""),
        SubmissionGroup::new("D").with_file("reward_function.py", REWARD_SPEED),
    ];

    let output = PlagiarismUseCaseImpl::new(ComparisonOptions::sequential()).compare(ComparisonInput {
        groups: &groups,
        threshold: 80.0,
    });

    assert_eq!(output.matches.len(), 1);
    assert_eq!(output.matches[0].right_group, "D");
    assert_eq!(output.stats.pairs_compared, 1);
    assert_eq!(output.stats.pairs_skipped, 5);
}

#[test]
fn test_out_of_range_thresholds_apply_literally() {
    let groups = single_file_groups(&[REWARD_SPEED, REWARD_SPEED]);

    assert_eq!(compare(&groups, 100.0, ComparisonOptions::sequential()).len(), 1);
    assert!(compare(&groups, 150.0, ComparisonOptions::sequential()).is_empty());
    assert_eq!(compare(&groups, -20.0, ComparisonOptions::sequential()).len(), 1);
}

#[test]
fn test_deeply_nested_submissions_do_not_abort_the_run() {
    let deep = format!("x = {}1{}\n", "(".repeat(5_000), ")".repeat(5_000));
    let groups = single_file_groups(&[&deep, &deep, REWARD_SPEED]);

    let sequential = compare(&groups, 90.0, ComparisonOptions::sequential());
    let parallel = compare(&groups, 90.0, ComparisonOptions::sequential().with_parallel(true));

    assert_eq!(sequential.len(), 1);
    assert_eq!(sequential[0].2, 100.0);
    assert_eq!(parallel, sequential);
}
