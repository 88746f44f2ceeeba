use crate::areas::tutorial::Tutorial;
use colored::Colorize;

impl Tutorial {
    pub fn steps(&mut self) -> anyhow::Result<()> {
        let steps = self.workspace().list_steps()?;

        for step in steps.iter() {
            writeln!(
                self.writer(),
                "{:>4}  {:<30} {}",
                step.name().number().to_string().yellow(),
                step.name().aliases().join(", "),
                step.path().display()
            )?;
        }

        Ok(())
    }
}
