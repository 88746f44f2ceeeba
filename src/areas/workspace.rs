use crate::artifacts::step::step_list::StepList;
use crate::artifacts::step::step_name::StepDir;
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// The directory holding every step of the tutorial.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn list_steps(&self) -> anyhow::Result<StepList> {
        if !self.path.is_dir() {
            anyhow::bail!(
                "The steps directory does not exist: {}",
                self.path.display()
            );
        }

        let mut steps = Vec::new();
        for entry in std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to read steps directory {}", self.path.display()))?
        {
            let path = entry?.path();
            if !path.is_dir() || Self::is_ignored(&path) {
                continue;
            }

            match StepDir::try_from_path(&path) {
                Ok(step) => steps.push(step),
                Err(e) => log::debug!("skipping {}: {}", path.display(), e),
            }
        }

        let steps = StepList::try_new(steps)?;
        log::info!("found {} steps in {}", steps.len(), self.path.display());

        Ok(steps)
    }

    /// Files of a step, relative to the step directory and sorted.
    pub fn list_files(&self, step: &StepDir) -> anyhow::Result<Vec<PathBuf>> {
        let root = step.path();
        if !root.is_dir() {
            anyhow::bail!("The step directory does not exist: {}", root.display());
        }

        let mut files = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_hidden(entry))
            .map(|entry| {
                entry.with_context(|| format!("Failed to walk step directory {}", root.display()))
            })
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => entry
                    .path()
                    .strip_prefix(root)
                    .ok()
                    .map(|path| Ok(path.to_path_buf())),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        files.sort();
        Ok(files)
    }

    pub fn read_file(&self, step: &StepDir, file_path: &Path) -> anyhow::Result<String> {
        let path = step.path().join(file_path);

        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read step file {}", path.display()))
    }

    fn is_hidden(entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| name.starts_with('.'))
    }
}
