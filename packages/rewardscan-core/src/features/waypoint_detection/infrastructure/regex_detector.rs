//! Regex-based hardcoded waypoint detector
//!
//! # Patterns
//!
//! ```text
//! number  = \d+(\.\d+)?
//! A       = ( number , number )            e.g. (3.2, 1.05)
//! B       = [ A , A , ... ]                e.g. [(0, 1), (2.5, 3)]
//! ```
//!
//! Extended set, in this order after A and B:
//!
//! ```text
//! C       = [ number , number , ... ]      e.g. [1.5, 2.0, 3.0]
//! D       = [xy]_coords = [ number, ... ]  e.g. x_coords = [1, 2]
//! ```
//!
//! Matches are leftmost-first and non-overlapping. A candidate whose start
//! directly follows one of `EXCLUDED_PREFIXES` is dropped and the search
//! resumes one character later, so a shorter literal nested inside it may
//! still count (negative-lookbehind behavior).

use once_cell::sync::Lazy;
use regex::Regex;

use super::WaypointDetector;
use crate::features::waypoint_detection::domain::{PatternSet, WaypointScan, EXCLUDED_PREFIXES};

const NUMBER: &str = r"\d+(?:\.\d+)?";

fn coordinate_pair() -> String {
    format!(r"\(\s*{n}\s*,\s*{n}\s*\)", n = NUMBER)
}

fn pair_list() -> String {
    let pair = coordinate_pair();
    format!(r"\[\s*{p}(?:\s*,\s*{p})*\s*\]", p = pair)
}

fn numeric_list() -> String {
    format!(r"\[\s*{n}(?:\s*,\s*{n})*\s*\]", n = NUMBER)
}

fn separate_coords() -> String {
    format!(r"[xy]_coords\s*=\s*{}", numeric_list())
}

// Assembled from constants only
static STANDARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}|{}", coordinate_pair(), pair_list()))
        .expect("standard waypoint pattern is valid")
});

static EXTENDED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "{}|{}|{}|{}",
        coordinate_pair(),
        pair_list(),
        numeric_list(),
        separate_coords()
    ))
    .expect("extended waypoint pattern is valid")
});

/// Hardcoded waypoint detector over a fixed pattern set
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexWaypointDetector {
    pattern_set: PatternSet,
}

impl RegexWaypointDetector {
    pub fn new(pattern_set: PatternSet) -> Self {
        Self { pattern_set }
    }

    pub fn pattern_set(&self) -> PatternSet {
        self.pattern_set
    }

    fn regex(&self) -> &'static Regex {
        match self.pattern_set {
            PatternSet::Standard => &STANDARD,
            PatternSet::Extended => &EXTENDED,
        }
    }

    /// All counted literals in `text`, in order
    pub fn find_literals(&self, text: &str) -> Vec<String> {
        let regex = self.regex();
        let mut literals = Vec::new();
        let mut pos = 0;

        while let Some(m) = regex.find_at(text, pos) {
            if is_excluded(&text[..m.start()]) {
                pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
                continue;
            }
            literals.push(m.as_str().to_string());
            pos = m.end();
        }

        literals
    }
}

fn is_excluded(preceding: &str) -> bool {
    EXCLUDED_PREFIXES
        .iter()
        .any(|ident| preceding.ends_with(ident))
}

impl WaypointDetector for RegexWaypointDetector {
    fn name(&self) -> &'static str {
        match self.pattern_set {
            PatternSet::Standard => "Regex Waypoint Detector (standard)",
            PatternSet::Extended => "Regex Waypoint Detector (extended)",
        }
    }

    fn scan(&self, text: &str, threshold: i64) -> WaypointScan {
        WaypointScan::from_matches(self.find_literals(text), threshold)
    }
}
