use crate::artifacts::step::STEP_NAME_REGEX;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepName {
    number: u64,
    slug: Option<String>,
}

impl StepName {
    pub fn try_parse(dir_name: &str) -> anyhow::Result<Self> {
        let re = regex::Regex::new(STEP_NAME_REGEX)
            .with_context(|| format!("invalid step name regex: {STEP_NAME_REGEX}"))?;

        let captures = re
            .captures(dir_name)
            .ok_or_else(|| anyhow::anyhow!("invalid step name: {}", dir_name))?;
        let number = captures[1]
            .parse::<u64>()
            .with_context(|| format!("step number out of range: {dir_name}"))?;
        let slug = captures.get(2).map(|slug| slug.as_str().to_string());

        Ok(Self { number, slug })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Every key the step can be referenced by: its number without leading
    /// zeros, then its slug if it has one.
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases = vec![self.number.to_string()];
        if let Some(slug) = &self.slug {
            aliases.push(slug.clone());
        }
        aliases
    }
}

impl std::fmt::Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.slug {
            Some(slug) => write!(f, "{}-{}", self.number, slug),
            None => write!(f, "{}", self.number),
        }
    }
}

/// A step directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDir {
    name: StepName,
    path: PathBuf,
}

impl StepDir {
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let dir_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow::anyhow!("step path has no name: {}", path.display()))?;

        Ok(Self {
            name: StepName::try_parse(dir_name)?,
            path: path.to_path_buf(),
        })
    }

    pub fn name(&self) -> &StepName {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
