//! Submission Loader - eager retrieval of every submission in scope
//!
//! Walks the storage ports in enumeration order and materializes
//! `SubmissionGroup`s before any analysis starts. Retrieval is best effort:
//!
//! | Storage outcome                         | Result                      |
//! |-----------------------------------------|-----------------------------|
//! | content fetched                         | `SourceFile` with content   |
//! | `Ok(None)`, NotFound, PermissionDenied, Decode | `SourceFile` without content |
//! | group listing NotFound/PermissionDenied | group skipped (warn)        |
//! | any other storage error                 | run fails                   |

use rewardscan_storage::{ContentProvider, GroupEnumerator, KeyFilter};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::shared::models::{SourceFile, SubmissionGroup};

/// Loads filtered submissions from a storage collaborator
pub struct SubmissionLoader<'a, S> {
    store: &'a S,
    filter: KeyFilter,
}

impl<'a, S> SubmissionLoader<'a, S>
where
    S: GroupEnumerator + ContentProvider,
{
    pub fn new(store: &'a S, filter: KeyFilter) -> Self {
        Self { store, filter }
    }

    /// Load every group accepted by the filter, in enumeration order
    pub fn load(&self) -> Result<Vec<SubmissionGroup>> {
        let mut groups = Vec::new();

        for group_id in self.store.list_groups()? {
            if !self.filter.matches_group(&group_id) {
                continue;
            }
            if let Some(group) = self.load_group(&group_id)? {
                groups.push(group);
            }
        }

        debug!(
            "loaded {} groups, {} files",
            groups.len(),
            groups.iter().map(SubmissionGroup::len).sum::<usize>()
        );
        Ok(groups)
    }

    fn load_group(&self, group_id: &str) -> Result<Option<SubmissionGroup>> {
        let keys = match self.store.list_files(group_id) {
            Ok(keys) => keys,
            Err(e) if e.is_recoverable() => {
                warn!("skipping group {}: {}", group_id, e);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut group = SubmissionGroup::new(group_id);
        for key in keys.into_iter().filter(|k| self.filter.matches_key(k)) {
            group.files.push(self.load_file(group_id, key)?);
        }
        Ok(Some(group))
    }

    fn load_file(&self, group_id: &str, file_id: String) -> Result<SourceFile> {
        match self.store.fetch(group_id, &file_id) {
            Ok(Some(content)) => Ok(SourceFile::new(group_id, file_id, content)),
            Ok(None) => Ok(SourceFile::missing(group_id, file_id)),
            Err(e) if e.is_recoverable() => {
                debug!("{}/{} unavailable: {}", group_id, file_id, e);
                Ok(SourceFile::missing(group_id, file_id))
            }
            Err(e) => Err(e.into()),
        }
    }
}
