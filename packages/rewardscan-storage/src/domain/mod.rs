//! Domain layer: collaborator ports for submission storage
//!
//! # Port Traits
//!
//! - `GroupEnumerator`: ordered listing of groups (buckets/teams) and their files
//! - `ContentProvider`: fetches the text of one submission
//! - `ResultSink`: persists a finished report
//!
//! Listings are returned in a stable order. The audit core relies on that
//! order for deterministic output and never re-sorts what it is given.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rewardscan_storage::domain::{ContentProvider, GroupEnumerator, KeyFilter};
//!
//! fn dump(store: &(impl GroupEnumerator + ContentProvider), filter: &KeyFilter) -> Result<()> {
//!     for group in store.list_groups()?.iter().filter(|g| filter.matches_group(g)) {
//!         for key in store.list_files(group)?.iter().filter(|k| filter.matches_key(k)) {
//!             println!("{group}/{key}: {:?}", store.fetch(group, key)?.map(|c| c.len()));
//!         }
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;

// ═══════════════════════════════════════════════════════════════════════════
// Port Traits
// ═══════════════════════════════════════════════════════════════════════════

/// Enumerates submission groups and the files inside them
pub trait GroupEnumerator {
    /// All group identifiers, in enumeration order
    fn list_groups(&self) -> Result<Vec<String>>;

    /// All file identifiers of a group, in enumeration order
    fn list_files(&self, group_id: &str) -> Result<Vec<String>>;
}

/// Supplies raw submission text
pub trait ContentProvider {
    /// Fetch one file.
    ///
    /// A missing object is `Ok(None)`, not an error.
    fn fetch(&self, group_id: &str, file_id: &str) -> Result<Option<String>>;
}

/// Accepts the final report of a run
pub trait ResultSink {
    fn write_report<T: Serialize + ?Sized>(&mut self, report: &T) -> Result<()>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// Naming filter applied at the input boundary
///
/// Every configured condition must hold; an unset condition accepts
/// everything.
///
/// # Examples
///
/// ```rust
/// use rewardscan_storage::domain::KeyFilter;
///
/// let filter = KeyFilter::default()
///     .with_group_prefix("aws-deepracer-assets")
///     .with_key_contains("MUDR")
///     .with_key_suffix("reward_function.py");
///
/// assert!(filter.matches_group("aws-deepracer-assets-team1"));
/// assert!(filter.matches_key("MUDR-model/reward_function.py"));
/// assert!(!filter.matches_key("other/reward_function.py"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyFilter {
    /// Groups must start with this prefix
    #[serde(default)]
    pub group_prefix: Option<String>,

    /// File keys must contain this substring
    #[serde(default)]
    pub key_contains: Option<String>,

    /// File keys must end with this suffix
    #[serde(default)]
    pub key_suffix: Option<String>,
}

impl KeyFilter {
    pub fn with_group_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.group_prefix = Some(prefix.into());
        self
    }

    pub fn with_key_contains(mut self, needle: impl Into<String>) -> Self {
        self.key_contains = Some(needle.into());
        self
    }

    pub fn with_key_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.key_suffix = Some(suffix.into());
        self
    }

    pub fn matches_group(&self, group_id: &str) -> bool {
        self.group_prefix
            .as_deref()
            .map_or(true, |prefix| group_id.starts_with(prefix))
    }

    pub fn matches_key(&self, file_id: &str) -> bool {
        let contains = self
            .key_contains
            .as_deref()
            .map_or(true, |needle| file_id.contains(needle));
        let suffix = self
            .key_suffix
            .as_deref()
            .map_or(true, |suffix| file_id.ends_with(suffix));
        contains && suffix
    }
}
