//! Infrastructure layer - Storage adapters
//!
//! - `filesystem`: local directory tree standing in for buckets
//! - `memory`: in-process store for tests and embedding
//! - `json_sink`: pretty JSON report writer

pub mod filesystem;
pub mod json_sink;
pub mod memory;

pub use filesystem::{FilesystemStore, Layout};
pub use json_sink::JsonReportSink;
pub use memory::MemoryStore;
