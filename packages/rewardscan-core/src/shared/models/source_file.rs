//! Submission models
//!
//! A `SourceFile` is one reward-function submission as handed over by the
//! storage layer. Its content is `None` when the fetch did not succeed.

use serde::{Deserialize, Serialize};

/// One submitted source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Owning group (bucket / team)
    pub group_id: String,

    /// Key of the file inside its group
    pub file_id: String,

    /// Raw text, absent when it could not be retrieved
    pub content: Option<String>,
}

impl SourceFile {
    pub fn new(
        group_id: impl Into<String>,
        file_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            file_id: file_id.into(),
            content: Some(content.into()),
        }
    }

    /// A listed file whose content could not be fetched
    pub fn missing(group_id: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            file_id: file_id.into(),
            content: None,
        }
    }

    /// `group/file` identifier used in reports
    pub fn identifier(&self) -> String {
        format!("{}/{}", self.group_id, self.file_id)
    }

    /// Content worth analysing: present and non-empty
    pub fn usable_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// Ordered collection of submissions from one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionGroup {
    pub id: String,
    pub files: Vec<SourceFile>,
}

impl SubmissionGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            files: Vec::new(),
        }
    }

    /// Append a file with content (builder style)
    pub fn with_file(mut self, file_id: impl Into<String>, content: impl Into<String>) -> Self {
        let file = SourceFile::new(self.id.clone(), file_id, content);
        self.files.push(file);
        self
    }

    /// Append a file whose content is absent (builder style)
    pub fn with_missing_file(mut self, file_id: impl Into<String>) -> Self {
        let file = SourceFile::missing(self.id.clone(), file_id);
        self.files.push(file);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
