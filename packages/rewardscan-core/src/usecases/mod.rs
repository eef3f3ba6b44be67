//! Usecase Layer - batch audit runs
//!
//! Wires the storage ports to the analysis features. Called by the
//! `rewardscan` binary; library users with submissions already in memory
//! can go straight to `AuditService::run`.

pub mod audit_service;
pub mod submission_loader;

// Re-export main API
pub use audit_service::{AppliedThresholds, AuditReport, AuditScope, AuditService, AuditStats};
pub use submission_loader::SubmissionLoader;
