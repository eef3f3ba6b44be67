//! Error types for rewardscan-core
//!
//! Provides unified error handling across the crate. Parse failures of
//! submitted code are *not* errors at this level: the scorer downgrades them
//! to a result value. `Parse` here means the parser itself could not run.

use thiserror::Error;

use crate::config::ConfigError;
use rewardscan_storage::StorageError;

/// Main error type for rewardscan-core operations
#[derive(Debug, Error)]
pub enum RewardscanError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parser could not be set up or run
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error (fatal, raised before any comparison)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage collaborator failed in a way that cannot be skipped
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RewardscanError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        RewardscanError::Parse(msg.into())
    }
}

/// Result type alias for rewardscan operations
pub type Result<T> = std::result::Result<T, RewardscanError>;
