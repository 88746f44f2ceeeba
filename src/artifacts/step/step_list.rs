use crate::artifacts::step::step_name::StepDir;
use std::collections::HashMap;

/// Steps in numeric order, with every alias resolved to its position.
#[derive(Debug, Clone, Default)]
pub struct StepList {
    steps: Vec<StepDir>,
    aliases: HashMap<String, usize>,
}

impl StepList {
    pub fn try_new(mut steps: Vec<StepDir>) -> anyhow::Result<Self> {
        steps.sort_by(|a, b| a.name().cmp(b.name()));

        let mut aliases = HashMap::new();
        for (idx, step) in steps.iter().enumerate() {
            for alias in step.name().aliases() {
                if let Some(previous) = aliases.insert(alias.clone(), idx) {
                    anyhow::bail!(
                        "step alias '{}' is used by both {} and {}",
                        alias,
                        steps[previous].path().display(),
                        step.path().display()
                    );
                }
            }
        }

        Ok(Self { steps, aliases })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDir> {
        self.steps.iter()
    }

    /// Each step together with the one it is diffed against.
    pub fn pairs(&self) -> impl Iterator<Item = (Option<&StepDir>, &StepDir)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(idx, step)| (idx.checked_sub(1).map(|prev| &self.steps[prev]), step))
    }

    pub fn find(&self, alias: &str) -> Option<(Option<&StepDir>, &StepDir)> {
        let key = normalize_alias(alias);
        let &idx = self.aliases.get(key.as_str())?;

        Some((idx.checked_sub(1).map(|prev| &self.steps[prev]), &self.steps[idx]))
    }
}

/// `007` and `7` name the same step.
pub fn normalize_alias(alias: &str) -> String {
    match alias.parse::<u64>() {
        Ok(number) => number.to_string(),
        Err(_) => alias.to_string(),
    }
}
