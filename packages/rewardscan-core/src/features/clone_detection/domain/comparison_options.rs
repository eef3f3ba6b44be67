//! Driver options

use serde::{Deserialize, Serialize};

use crate::config::AuditConfig;

/// When the driver scores a pair by character-sequence ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextualFallback {
    /// Structural score only; parse failures score 0
    #[default]
    Off,
    /// Pairs where either side does not parse
    ParseFailures,
    /// Additionally any pair whose structural score misses the threshold,
    /// so a pair is reported when either method reaches it
    Either,
}

impl TextualFallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextualFallback::Off => "off",
            TextualFallback::ParseFailures => "parse_failures",
            TextualFallback::Either => "either",
        }
    }
}

/// Knobs of the pairwise comparison driver besides the threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonOptions {
    /// Fan pair comparisons out over rayon (needs the `parallel` feature)
    pub parallel: bool,

    /// Which pairs fall back to the textual ratio
    pub textual_fallback: TextualFallback,

    /// Run the comment stripper over each text before parsing
    pub strip_comments: bool,
}

impl ComparisonOptions {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_textual_fallback(mut self, mode: TextualFallback) -> Self {
        self.textual_fallback = mode;
        self
    }

    pub fn with_strip_comments(mut self, enabled: bool) -> Self {
        self.strip_comments = enabled;
        self
    }
}

impl From<&AuditConfig> for ComparisonOptions {
    fn from(config: &AuditConfig) -> Self {
        Self {
            parallel: config.parallel,
            textual_fallback: config.textual_fallback,
            strip_comments: config.strip_comments_before_scoring,
        }
    }
}
