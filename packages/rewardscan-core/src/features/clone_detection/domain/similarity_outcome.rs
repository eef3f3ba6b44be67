//! Result of scoring one pair

/// Which input failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSide {
    Left,
    Right,
    Both,
}

impl ParseSide {
    /// Combine per-side parse results, `None` when both parsed
    pub fn from_failures(left_failed: bool, right_failed: bool) -> Option<Self> {
        match (left_failed, right_failed) {
            (false, false) => None,
            (true, false) => Some(ParseSide::Left),
            (false, true) => Some(ParseSide::Right),
            (true, true) => Some(ParseSide::Both),
        }
    }
}

/// Structural similarity of a pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimilarityOutcome {
    /// Percentage in 0-100
    Scored(f64),
    /// At least one side is not valid source
    ParseFailure { side: ParseSide },
}

impl SimilarityOutcome {
    /// Percentage, with parse failures reported as 0
    pub fn percentage(&self) -> f64 {
        match self {
            SimilarityOutcome::Scored(p) => *p,
            SimilarityOutcome::ParseFailure { .. } => 0.0,
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, SimilarityOutcome::ParseFailure { .. })
    }
}
