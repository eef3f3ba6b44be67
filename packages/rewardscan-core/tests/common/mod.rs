//! Common test utilities for rewardscan-core
//!
//! Shared reward-function fixtures and submission-tree builders for the
//! integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
