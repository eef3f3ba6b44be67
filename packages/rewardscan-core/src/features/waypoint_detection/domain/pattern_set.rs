//! Literal pattern selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiers that, written directly before a literal, mark it as
/// ordinary waypoint variable usage rather than hardcoded data.
pub const EXCLUDED_PREFIXES: &[&str] = &["x", "y", "waypoints", "closest_waypoints"];

/// Which literal shapes the detector counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSet {
    /// Coordinate tuples `(1.0, 2.0)` and bracketed lists of them
    #[default]
    Standard,
    /// Standard plus bare numeric lists `[1.0, 2.0, 3.0]` and
    /// `x_coords = [...]` / `y_coords = [...]` arrays
    Extended,
}

impl PatternSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternSet::Standard => "standard",
            PatternSet::Extended => "extended",
        }
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(PatternSet::default(), PatternSet::Standard);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PatternSet::Extended).unwrap();
        assert_eq!(json, "\"extended\"");
    }
}
