use crate::artifacts::diff::myers::{Edit, MyersDiff};
use crate::artifacts::fold::NULL_PATH;
use std::path::Path;

/// What happened to one file between two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Added(String),
    Deleted(String),
    Modified { old: String, new: String },
}

impl FileChange {
    /// Files are compared line by line, the way the edit script sees them, so
    /// a change of line endings or of the final newline alone is no change.
    pub fn from_contents(old: Option<String>, new: Option<String>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(FileChange::Added(new)),
            (Some(old), None) => Some(FileChange::Deleted(old)),
            (Some(old), Some(new)) if !old.lines().eq(new.lines()) => {
                Some(FileChange::Modified { old, new })
            }
            _ => None,
        }
    }

    fn edits(&self) -> Vec<Edit<&str>> {
        match self {
            // no need to run the diff when one side is empty
            FileChange::Added(new) => new.lines().map(|value| Edit::Insert { value }).collect(),
            FileChange::Deleted(old) => old.lines().map(|value| Edit::Delete { value }).collect(),
            FileChange::Modified { old, new } => {
                let old = old.lines().collect::<Vec<_>>();
                let new = new.lines().collect::<Vec<_>>();
                MyersDiff::new(&old, &new).diff()
            }
        }
    }

    fn old_line_count(&self) -> usize {
        match self {
            FileChange::Added(_) => 0,
            FileChange::Deleted(old) | FileChange::Modified { old, .. } => old.lines().count(),
        }
    }

    fn new_line_count(&self) -> usize {
        match self {
            FileChange::Deleted(_) => 0,
            FileChange::Added(new) | FileChange::Modified { new, .. } => new.lines().count(),
        }
    }
}

/// Unified diff of one file with the whole file as context: a single hunk,
/// so nothing is ever hidden by the diff itself.
pub fn unified(path: &Path, change: &FileChange) -> String {
    let a_path = match change {
        FileChange::Added(_) => NULL_PATH.to_string(),
        _ => format!("a/{}", path.display()),
    };
    let b_path = match change {
        FileChange::Deleted(_) => NULL_PATH.to_string(),
        _ => format!("b/{}", path.display()),
    };

    let mut patch = String::new();
    patch.push_str(&format!(
        "diff --git a/{} b/{}\n",
        path.display(),
        path.display()
    ));
    patch.push_str(&format!("--- {a_path}\n"));
    patch.push_str(&format!("+++ {b_path}\n"));
    patch.push_str(&format!(
        "@@ -{} +{} @@\n",
        hunk_range(change.old_line_count()),
        hunk_range(change.new_line_count())
    ));

    for edit in change.edits() {
        patch.push_str(&edit.to_string());
        patch.push('\n');
    }

    patch
}

fn hunk_range(count: usize) -> String {
    match count {
        0 => "0,0".to_string(),
        1 => "1".to_string(),
        count => format!("1,{count}"),
    }
}
