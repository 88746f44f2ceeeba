use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The generated site on disk.
#[derive(Debug)]
pub struct Site {
    path: Box<Path>,
}

impl Site {
    pub fn new(path: Box<Path>) -> Self {
        Site { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove whatever a previous build left behind.
    pub fn reset(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path).with_context(|| {
                format!("Failed to remove output directory {}", self.path.display())
            })?;
        }

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Failed to create output directory {}", self.path.display()))
    }

    /// Copy the static assets of `input_dir` into the site, except the files in
    /// `skip` (which are consumed by the build itself).
    pub fn copy_assets(&self, input_dir: &Path, skip: &[PathBuf]) -> anyhow::Result<usize> {
        if !input_dir.is_dir() {
            log::debug!("no input directory at {}", input_dir.display());
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(input_dir).min_depth(1).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to walk input directory {}", input_dir.display()))?;
            if skip.iter().any(|path| path.as_path() == entry.path()) {
                continue;
            }

            let relative = entry.path().strip_prefix(input_dir)?;
            let target = self.path.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .with_context(|| format!("Failed to create directory {}", target.display()))?;
            } else {
                std::fs::copy(entry.path(), &target).with_context(|| {
                    format!("Failed to copy asset {}", entry.path().display())
                })?;
                copied += 1;
            }
        }

        Ok(copied)
    }

    pub fn write(&self, file_name: &str, content: &str) -> anyhow::Result<()> {
        let path = self.path.join(file_name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());

        Ok(())
    }
}

pub fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
