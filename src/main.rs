use anyhow::Result;
use clap::{Parser, Subcommand};
use minus::{Pager, page_all};
use std::path::PathBuf;
use stepwise::areas::tutorial::Tutorial;
use stepwise::artifacts::terminal::{PagerWriter, should_page};
use stepwise::config::Config;

#[derive(Parser)]
#[command(
    name = "stepwise",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Build a step by step programming tutorial",
    long_about = "Turns a book of markdown chapters and a directory of program snapshots \
    into a static HTML tutorial. Every snapshot is shown as a diff against the one before it, \
    with unchanged code folded away.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Path to stepwise.toml")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "build",
        about = "Build the tutorial site",
        long_about = "This command renders every chapter and the table of contents into the output \
        directory, which is cleared first."
    )]
    Build {
        #[arg(long, help = "Directory holding the chapter markdown files")]
        book: Option<PathBuf>,
        #[arg(long, help = "Directory holding the steps")]
        steps: Option<PathBuf>,
        #[arg(long, help = "Directory holding the template, stylesheet and assets")]
        input: Option<PathBuf>,
        #[arg(long, help = "Directory the site is written to")]
        output: Option<PathBuf>,
        #[arg(long, help = "Escape source code without highlighting it")]
        no_highlight: bool,
    },
    #[command(
        name = "show",
        about = "Print the folded diff of a step",
        long_about = "This command prints the diff of one step against the step before it, \
        folded the same way as on the site. The step is named by number or slug."
    )]
    Show {
        #[arg(index = 1, help = "Step number or slug")]
        step: String,
        #[arg(long, help = "Directory holding the steps")]
        steps: Option<PathBuf>,
    },
    #[command(
        name = "steps",
        about = "List the steps",
        long_about = "This command lists every step in order with the aliases it can be referenced by."
    )]
    Steps {
        #[arg(long, help = "Directory holding the steps")]
        steps: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            book,
            steps,
            input,
            output,
            no_highlight,
        } => {
            let config = config
                .with_book_dir(book)
                .with_steps_dir(steps)
                .with_input_dir(input)
                .with_output_dir(output);
            let highlight = config.highlight && !no_highlight;

            let mut tutorial =
                Tutorial::new(config.with_highlight(highlight), Box::new(std::io::stdout()));
            tutorial.build()?
        }
        Commands::Show { step, steps } => {
            let config = config.with_steps_dir(steps);

            if should_page() {
                let pager = Pager::new();
                let mut tutorial =
                    Tutorial::new(config, Box::new(PagerWriter::new(pager.clone())));
                tutorial.show(&step)?;
                page_all(pager)?;
            } else {
                let mut tutorial = Tutorial::new(config, Box::new(std::io::stdout()));
                tutorial.show(&step)?;
            }
        }
        Commands::Steps { steps } => {
            let mut tutorial = Tutorial::new(config.with_steps_dir(steps), Box::new(std::io::stdout()));
            tutorial.steps()?
        }
    }

    Ok(())
}
