//! Property-based tests for the scorer, normalizer and detector

use proptest::prelude::*;
use rewardscan_core::features::clone_detection::text_ratio;
use rewardscan_core::{detect_hardcoded_waypoints, similarity, strip_comments};

// Identifiers that can never collide with a Python keyword
fn python_identifier() -> impl Strategy<Value = String> {
    "v_[a-z0-9_]{0,12}"
}

fn python_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        "[a-z ]{0,10}".prop_map(|s| format!("'{s}'")),
    ]
}

fn python_statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (python_identifier(), python_literal()).prop_map(|(name, lit)| format!("{name} = {lit}")),
        (python_identifier(), python_identifier())
            .prop_map(|(name, arg)| format!("def {name}({arg}):\n    return {arg}")),
        (python_identifier(), python_literal(), python_literal())
            .prop_map(|(name, a, b)| format!("if {name} > {a}:\n    {name} = {b}")),
        python_identifier().prop_map(|name| format!("import {name}")),
    ]
}

// Strategy for generating a small valid Python module
fn python_source() -> impl Strategy<Value = String> {
    prop::collection::vec(python_statement(), 1..8).prop_map(|s| s.join("\n") + "\n")
}

proptest! {
    #[test]
    fn prop_self_similarity_is_100(source in python_source()) {
        prop_assert_eq!(similarity(&source, &source).percentage(), 100.0);
    }

    #[test]
    fn prop_similarity_is_symmetric(a in python_source(), b in python_source()) {
        prop_assert_eq!(similarity(&a, &b).percentage(), similarity(&b, &a).percentage());
    }

    #[test]
    fn prop_similarity_in_range(a in python_source(), b in python_source()) {
        let score = similarity(&a, &b).percentage();
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn prop_arbitrary_text_never_panics(a in "\\PC{0,80}", b in "\\PC{0,80}") {
        let score = similarity(&a, &b).percentage();
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn prop_comment_free_text_unchanged(text in "[^#'\"]{0,200}") {
        prop_assert_eq!(strip_comments(&text), text);
    }

    #[test]
    fn prop_stripped_text_has_no_line_comments(text in "\\PC{0,120}") {
        prop_assert!(!strip_comments(&text).contains('#'));
    }

    #[test]
    fn prop_detector_count_matches_list(text in "\\PC{0,200}", threshold in -5i64..20) {
        let scan = detect_hardcoded_waypoints(&text, threshold);
        prop_assert_eq!(scan.flagged, scan.matches.len() as i64 > threshold);
    }

    #[test]
    fn prop_text_ratio_symmetric(a in "[a-c]{0,20}", b in "[a-c]{0,20}") {
        prop_assert_eq!(text_ratio(&a, &b), text_ratio(&b, &a));
    }
}
