//! Match records

use serde::{Deserialize, Serialize};

use crate::shared::models::SourceFile;

/// How a pair's similarity was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Syntax-tree node matching
    #[default]
    Structural,
    /// Character-sequence ratio over the raw texts
    Textual,
}

/// A cross-group pair at or above the similarity threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub left_group: String,
    pub left_file: String,
    pub right_group: String,
    pub right_file: String,

    /// 0-100
    pub similarity_percentage: f64,

    pub left_content: String,
    pub right_content: String,

    #[serde(default)]
    pub method: MatchMethod,
}

impl MatchRecord {
    /// Build a record from the two compared files
    ///
    /// Callers only compare files with usable content; an absent side is
    /// recorded as empty.
    pub fn from_pair(
        left: &SourceFile,
        right: &SourceFile,
        similarity_percentage: f64,
        method: MatchMethod,
    ) -> Self {
        Self {
            left_group: left.group_id.clone(),
            left_file: left.file_id.clone(),
            right_group: right.group_id.clone(),
            right_file: right.file_id.clone(),
            similarity_percentage,
            left_content: left.content.clone().unwrap_or_default(),
            right_content: right.content.clone().unwrap_or_default(),
            method,
        }
    }

    pub fn left_identifier(&self) -> String {
        format!("{}/{}", self.left_group, self.left_file)
    }

    pub fn right_identifier(&self) -> String {
        format!("{}/{}", self.right_group, self.right_file)
    }
}
