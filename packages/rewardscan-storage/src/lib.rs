//! rewardscan-storage: collaborator ports for the submission audit
//!
//! The audit core never talks to a bucket directly. It sees three ports:
//!
//! 1. **GroupEnumerator**: ordered group and file listings
//! 2. **ContentProvider**: raw text of one submission (`None` when missing)
//! 3. **ResultSink**: persistence of the finished report
//!
//! Naming filters (`KeyFilter`) are applied at this boundary, before any
//! content reaches the core.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rewardscan_storage::{FilesystemStore, GroupEnumerator, ContentProvider};
//!
//! let store = FilesystemStore::grouped("./submissions")?;
//! for group in store.list_groups()? {
//!     for key in store.list_files(&group)? {
//!         let content = store.fetch(&group, &key)?;
//!     }
//! }
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{ContentProvider, GroupEnumerator, KeyFilter, ResultSink};
pub use infrastructure::{FilesystemStore, JsonReportSink, Layout, MemoryStore};
