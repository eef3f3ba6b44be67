//! Configuration System
//!
//! Three layers, later ones win:
//! - Built-in defaults (`AuditConfig::default()`)
//! - YAML file, schema v1 (`AuditConfig::from_yaml`)
//! - Operator flags, parsed with `parse_threshold` / `parse_count_threshold`
//!
//! # Examples
//!
//! ```rust,ignore
//! use rewardscan_core::config::{AuditConfig, parse_threshold};
//!
//! let config = AuditConfig::from_yaml("audit.yaml")?
//!     .similarity_threshold(parse_threshold("similarity_threshold", &flag)?);
//! config.validate()?;
//! ```

pub mod audit_config;
pub mod error;
pub mod io;

// Re-exports
pub use audit_config::{
    parse_count_threshold, parse_threshold, AuditConfig, DEFAULT_KEY_SUFFIX,
    DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_WAYPOINT_THRESHOLD,
};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
