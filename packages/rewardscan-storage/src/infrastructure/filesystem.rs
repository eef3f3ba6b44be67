//! Filesystem adapter
//!
//! Mirrors a bucket listing with a local directory tree:
//!
//! ```text
//! root/
//! ├── team-a/                 # group "team-a"
//! │   └── MUDR-1/reward_function.py
//! └── team-b/
//!     └── reward_function.py
//! ```
//!
//! File identifiers are `/`-separated paths relative to their group
//! directory, so they read like object keys on every platform.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::{ContentProvider, GroupEnumerator};
use crate::{Result, StorageError};

/// How the root directory maps onto groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every direct sub-directory of the root is one group
    Grouped,
    /// The root itself is the only group
    Flat,
}

/// Directory-backed submission store
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
    layout: Layout,
}

impl FilesystemStore {
    /// Open a root whose sub-directories are groups
    pub fn grouped(root: impl Into<PathBuf>) -> Result<Self> {
        Self::open(root.into(), Layout::Grouped)
    }

    /// Open a single directory as one group
    pub fn flat(root: impl Into<PathBuf>) -> Result<Self> {
        Self::open(root.into(), Layout::Flat)
    }

    fn open(root: PathBuf, layout: Layout) -> Result<Self> {
        if !root.is_dir() {
            return Err(StorageError::config(format!(
                "Submission root is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root, layout })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Group id used for the flat layout (the directory's own name)
    fn flat_group_id(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    }

    fn group_dir(&self, group_id: &str) -> Result<PathBuf> {
        match self.layout {
            Layout::Flat if group_id == self.flat_group_id() => Ok(self.root.clone()),
            Layout::Flat => Err(StorageError::not_found(format!("group {}", group_id))),
            Layout::Grouped => {
                let dir = self.root.join(group_id);
                if dir.is_dir() {
                    Ok(dir)
                } else {
                    Err(StorageError::not_found(format!("group {}", group_id)))
                }
            }
        }
    }
}

/// Render a relative path as an object-style key
fn to_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl GroupEnumerator for FilesystemStore {
    fn list_groups(&self) -> Result<Vec<String>> {
        if self.layout == Layout::Flat {
            return Ok(vec![self.flat_group_id()]);
        }

        let entries = std::fs::read_dir(&self.root)
            .map_err(|e| StorageError::from_io(e, self.root.display().to_string()))?;

        let mut groups = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                groups.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        groups.sort();
        Ok(groups)
    }

    fn list_files(&self, group_id: &str) -> Result<Vec<String>> {
        let dir = self.group_dir(group_id)?;
        let max_depth = match self.layout {
            Layout::Flat => 1,
            Layout::Grouped => usize::MAX,
        };

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(max_depth) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("skipping unreadable entry under {}: {}", dir.display(), err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&dir) {
                files.push(to_key(relative));
            }
        }
        files.sort();
        Ok(files)
    }
}

impl ContentProvider for FilesystemStore {
    fn fetch(&self, group_id: &str, file_id: &str) -> Result<Option<String>> {
        let path = self.group_dir(group_id)?.join(file_id);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::from_io(err, path.display().to_string())),
        }
    }
}
