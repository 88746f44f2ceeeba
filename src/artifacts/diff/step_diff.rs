use crate::areas::workspace::Workspace;
use crate::artifacts::diff::patch::{FileChange, unified};
use crate::artifacts::step::step_name::StepDir;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Diffs a step directory against the one before it.
#[derive(new)]
pub struct StepDiff<'w> {
    workspace: &'w Workspace,
}

impl StepDiff<'_> {
    /// Full-context patch text for every file that differs between `prev` and
    /// `current`. Without a previous step every file shows up as added.
    pub fn patch(&self, prev: Option<&StepDir>, current: &StepDir) -> anyhow::Result<String> {
        let old_files = match prev {
            Some(prev) => self.workspace.list_files(prev)?,
            None => Vec::new(),
        };
        let new_files = self.workspace.list_files(current)?;

        let old_set = old_files.iter().cloned().collect::<BTreeSet<_>>();
        let new_set = new_files.iter().cloned().collect::<BTreeSet<_>>();
        let all_files = old_set.union(&new_set).cloned().collect::<Vec<PathBuf>>();

        let mut patch = String::new();
        for file_path in all_files {
            let old = match prev {
                Some(prev) if old_set.contains(&file_path) => {
                    Some(self.workspace.read_file(prev, &file_path)?)
                }
                _ => None,
            };
            let new = if new_set.contains(&file_path) {
                Some(self.workspace.read_file(current, &file_path)?)
            } else {
                None
            };

            match FileChange::from_contents(old, new) {
                Some(change) => {
                    log::debug!("{}: {} changed", current.name(), file_path.display());
                    patch.push_str(&unified(&file_path, &change));
                }
                None => log::debug!("{}: {} unchanged", current.name(), file_path.display()),
            }
        }

        Ok(patch)
    }
}
