//! In-memory store
//!
//! Keeps groups and files in insertion order. Entries can be marked as
//! unreadable to exercise best-effort fetch handling.

use std::collections::HashSet;

use crate::domain::{ContentProvider, GroupEnumerator};
use crate::{Result, StorageError};

#[derive(Debug, Clone)]
struct MemoryGroup {
    id: String,
    files: Vec<(String, Option<String>)>,
}

/// Ordered in-memory submission store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    groups: Vec<MemoryGroup>,
    denied: HashSet<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or extend) a group with a file whose content is present
    pub fn with_file(
        self,
        group_id: impl Into<String>,
        file_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.insert(group_id.into(), file_id.into(), Some(content.into()))
    }

    /// Add a file that is listed but has no retrievable content
    pub fn with_missing_file(self, group_id: impl Into<String>, file_id: impl Into<String>) -> Self {
        self.insert(group_id.into(), file_id.into(), None)
    }

    /// Add a file whose fetch fails with a permission error
    pub fn with_denied_file(
        mut self,
        group_id: impl Into<String>,
        file_id: impl Into<String>,
    ) -> Self {
        let group_id = group_id.into();
        let file_id = file_id.into();
        self.denied.insert((group_id.clone(), file_id.clone()));
        self.insert(group_id, file_id, None)
    }

    fn insert(mut self, group_id: String, file_id: String, content: Option<String>) -> Self {
        match self.groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => group.files.push((file_id, content)),
            None => self.groups.push(MemoryGroup {
                id: group_id,
                files: vec![(file_id, content)],
            }),
        }
        self
    }

    fn group(&self, group_id: &str) -> Result<&MemoryGroup> {
        self.groups
            .iter()
            .find(|g| g.id == group_id)
            .ok_or_else(|| StorageError::not_found(format!("group {}", group_id)))
    }
}

impl GroupEnumerator for MemoryStore {
    fn list_groups(&self) -> Result<Vec<String>> {
        Ok(self.groups.iter().map(|g| g.id.clone()).collect())
    }

    fn list_files(&self, group_id: &str) -> Result<Vec<String>> {
        Ok(self
            .group(group_id)?
            .files
            .iter()
            .map(|(id, _)| id.clone())
            .collect())
    }
}

impl ContentProvider for MemoryStore {
    fn fetch(&self, group_id: &str, file_id: &str) -> Result<Option<String>> {
        if self
            .denied
            .contains(&(group_id.to_string(), file_id.to_string()))
        {
            return Err(StorageError::permission_denied(format!(
                "{}/{}",
                group_id, file_id
            )));
        }

        Ok(self
            .group(group_id)?
            .files
            .iter()
            .find(|(id, _)| id == file_id)
            .and_then(|(_, content)| content.clone()))
    }
}
