use crate::areas::tutorial::Tutorial;
use crate::artifacts::diff::step_diff::StepDiff;
use crate::artifacts::fold::fold_diff;
use crate::artifacts::highlight::plain::Verbatim;
use crate::artifacts::terminal::format_rendered_file;

impl Tutorial {
    /// Print the folded diff of one step, found by number or slug.
    pub fn show(&mut self, alias: &str) -> anyhow::Result<()> {
        let steps = self.workspace().list_steps()?;
        let (prev, step) = steps
            .find(alias)
            .ok_or_else(|| anyhow::anyhow!("no step named '{}'", alias))?;

        let patch = StepDiff::new(self.workspace()).patch(prev, step)?;
        let files = fold_diff(&patch, &Verbatim)?;

        if files.is_empty() {
            writeln!(self.writer(), "{}: no changes", step.name())?;
            return Ok(());
        }

        for file in &files {
            write!(self.writer(), "{}", format_rendered_file(file))?;
        }

        Ok(())
    }
}
