//! Configuration I/O (YAML loading)
//!
//! Schema v1: every field except `version` is optional and overrides the
//! built-in default.
//!
//! ```yaml
//! version: 1
//! similarity_threshold: 85
//! waypoint_threshold: 10
//! textual_fallback: either      # off | parse_failures | either
//! filter:
//!   group_prefix: aws-deepracer-assets
//!   key_contains: MUDR
//!   key_suffix: reward_function.py
//! ```

use std::path::Path;

use rewardscan_storage::KeyFilter;
use serde::{Deserialize, Serialize};

use super::audit_config::AuditConfig;
use super::error::{ConfigError, ConfigResult};
use crate::features::clone_detection::domain::TextualFallback;
use crate::features::waypoint_detection::domain::PatternSet;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoint_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub textual_fallback: Option<TextualFallback>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_set: Option<PatternSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_comments_before_scoring: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<KeyFilter>,
}

impl ConfigFileV1 {
    /// Apply the file's overrides on top of `base`
    fn apply(self, base: AuditConfig) -> AuditConfig {
        AuditConfig {
            similarity_threshold: self
                .similarity_threshold
                .unwrap_or(base.similarity_threshold),
            waypoint_threshold: self.waypoint_threshold.unwrap_or(base.waypoint_threshold),
            parallel: self.parallel.unwrap_or(base.parallel),
            textual_fallback: self.textual_fallback.unwrap_or(base.textual_fallback),
            pattern_set: self.pattern_set.unwrap_or(base.pattern_set),
            strip_comments_before_scoring: self
                .strip_comments_before_scoring
                .unwrap_or(base.strip_comments_before_scoring),
            filter: self.filter.unwrap_or(base.filter),
        }
    }
}

impl AuditConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => {
                return Err(ConfigError::UnsupportedVersion {
                    found: v,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        let config = file.apply(AuditConfig::default());
        config.validate()?;
        Ok(config)
    }

    /// Export as a complete v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigFileV1 {
            version: Some(1),
            similarity_threshold: Some(self.similarity_threshold),
            waypoint_threshold: Some(self.waypoint_threshold),
            parallel: Some(self.parallel),
            textual_fallback: Some(self.textual_fallback),
            pattern_set: Some(self.pattern_set),
            strip_comments_before_scoring: Some(self.strip_comments_before_scoring),
            filter: Some(self.filter.clone()),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}
