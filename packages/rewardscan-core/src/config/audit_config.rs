//! Audit run configuration
//!
//! Two operator knobs matter to the analysis: the similarity threshold
//! (percentage) and the waypoint match-count threshold. Both are applied
//! literally; negative values or percentages above 100 are accepted.
//!
//! # Example
//!
//! ```rust
//! use rewardscan_core::config::{parse_threshold, AuditConfig};
//!
//! let config = AuditConfig::default()
//!     .similarity_threshold(parse_threshold("similarity_threshold", "92.5").unwrap())
//!     .waypoint_threshold(10);
//!
//! assert_eq!(config.similarity_threshold, 92.5);
//! assert!(parse_threshold("similarity_threshold", "high").is_err());
//! ```

use rewardscan_storage::KeyFilter;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::features::clone_detection::domain::TextualFallback;
use crate::features::waypoint_detection::domain::PatternSet;

/// Default similarity threshold (percent)
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 80.0;

/// Default waypoint match-count threshold
pub const DEFAULT_WAYPOINT_THRESHOLD: i64 = 5;

/// Only keys ending with this are treated as submissions by default
pub const DEFAULT_KEY_SUFFIX: &str = "reward_function.py";

/// Complete settings for one audit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Minimum similarity (percent) for a pair to be reported
    pub similarity_threshold: f64,

    /// A file is flagged when its literal count is strictly above this
    pub waypoint_threshold: i64,

    /// Fan pair comparisons out over the rayon pool
    pub parallel: bool,

    /// Which pairs are also scored with the character-sequence ratio
    pub textual_fallback: TextualFallback,

    /// Literal patterns the waypoint detector counts
    pub pattern_set: PatternSet,

    /// Strip comments and docstrings before building syntax trees
    pub strip_comments_before_scoring: bool,

    /// Naming filter for groups and files
    pub filter: KeyFilter,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            waypoint_threshold: DEFAULT_WAYPOINT_THRESHOLD,
            parallel: false,
            textual_fallback: TextualFallback::Off,
            pattern_set: PatternSet::Standard,
            strip_comments_before_scoring: false,
            filter: KeyFilter::default().with_key_suffix(DEFAULT_KEY_SUFFIX),
        }
    }
}

impl AuditConfig {
    pub fn similarity_threshold(mut self, value: f64) -> Self {
        self.similarity_threshold = value;
        self
    }

    pub fn waypoint_threshold(mut self, value: i64) -> Self {
        self.waypoint_threshold = value;
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn textual_fallback(mut self, mode: TextualFallback) -> Self {
        self.textual_fallback = mode;
        self
    }

    pub fn pattern_set(mut self, pattern_set: PatternSet) -> Self {
        self.pattern_set = pattern_set;
        self
    }

    pub fn strip_comments_before_scoring(mut self, enabled: bool) -> Self {
        self.strip_comments_before_scoring = enabled;
        self
    }

    pub fn filter(mut self, filter: KeyFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Reject settings no comparison can be made against
    pub fn validate(&self) -> ConfigResult<()> {
        if self.similarity_threshold.is_nan() {
            return Err(ConfigError::invalid_threshold(
                "similarity_threshold",
                self.similarity_threshold,
            ));
        }
        Ok(())
    }
}

/// Parse an operator-supplied percentage threshold
pub fn parse_threshold(field: &str, raw: &str) -> ConfigResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(ConfigError::invalid_threshold(field, raw)),
    }
}

/// Parse an operator-supplied match-count threshold
pub fn parse_count_threshold(field: &str, raw: &str) -> ConfigResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::invalid_threshold(field, raw))
}
