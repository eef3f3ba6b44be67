//! Submission builders

use std::fs;
use std::path::Path;

use rewardscan_core::shared::models::SubmissionGroup;
use tempfile::TempDir;

/// Groups `A`, `B`, `C`, ... with one `reward_function.py` each
pub fn single_file_groups(contents: &[&str]) -> Vec<SubmissionGroup> {
    contents
        .iter()
        .enumerate()
        .map(|(i, content)| {
            let id = ((b'A' + i as u8) as char).to_string();
            SubmissionGroup::new(id).with_file("reward_function.py", *content)
        })
        .collect()
}

/// Write `(group, key, content)` entries below a fresh temporary root
pub fn submission_tree(entries: &[(&str, &str, &str)]) -> TempDir {
    let root = TempDir::new().expect("temp dir");
    for (group, key, content) in entries {
        write_file(&root.path().join(group), key, content);
    }
    root
}

fn write_file(group_dir: &Path, key: &str, content: &str) {
    let path = group_dir.join(key);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create group dir");
    }
    fs::write(path, content).expect("write submission");
}
