//! Configuration error types

use thiserror::Error;

/// Configuration error type
///
/// Every variant is fatal: a run never starts with an unusable setting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Threshold that cannot be read as a number
    #[error("Invalid value for '{field}': '{value}' is not a number. {hint}")]
    InvalidThreshold {
        field: String,
        value: String,
        hint: String,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a threshold error with the default hint
    pub fn invalid_threshold(field: impl Into<String>, value: impl ToString) -> Self {
        let field = field.into();
        let hint = if field.starts_with("waypoint") {
            "Expected a whole number such as 10."
        } else {
            "Expected a percentage such as 80 or 92.5."
        };

        Self::InvalidThreshold {
            field,
            value: value.to_string(),
            hint: hint.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_threshold_message() {
        let err = ConfigError::invalid_threshold("similarity_threshold", "high");
        let msg = err.to_string();
        assert!(msg.contains("similarity_threshold"));
        assert!(msg.contains("'high'"));
        assert!(msg.contains("percentage"));
    }

    #[test]
    fn test_waypoint_hint() {
        let err = ConfigError::invalid_threshold("waypoint_threshold", "ten");
        assert!(err.to_string().contains("whole number"));
    }

    #[test]
    fn test_unsupported_version_lists_supported() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported configuration version 3. Supported versions: 1"
        );
    }
}
