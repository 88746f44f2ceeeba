use crate::areas::site::read_input;
use crate::areas::tutorial::Tutorial;
use crate::artifacts::diff::step_diff::StepDiff;
use crate::artifacts::fold::fold_diff;
use crate::artifacts::fold::render::render_html;
use crate::artifacts::highlight::Highlighter;
use crate::artifacts::highlight::plain::escape_html;
use crate::artifacts::highlight::theme::theme_css;
use crate::artifacts::page::chapter::{Chapter, Placeholder};
use crate::artifacts::page::fragments::StepFragments;
use crate::artifacts::page::listing::render_listing;
use crate::artifacts::page::template::Template;
use crate::artifacts::page::toc::{TableOfContents, TocEntry};
use crate::artifacts::step::step_list::{StepList, normalize_alias};
use std::collections::BTreeSet;

pub const INDEX_FILE_NAME: &str = "index.html";

impl Tutorial {
    pub fn build(&mut self) -> anyhow::Result<()> {
        let config = self.config();
        let template_path = config.template_path();
        let stylesheet_path = config.stylesheet_path();

        let template = Template::new(read_input(&template_path)?);
        let chapters = Chapter::list(&config.book_dir)?
            .iter()
            .map(|path| Chapter::load(path))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let steps = self.workspace().list_steps()?;

        self.site().reset()?;
        let copied = self.site().copy_assets(
            &config.input_dir,
            &[template_path.clone(), stylesheet_path.clone()],
        )?;
        log::info!("copied {copied} assets");

        self.write_stylesheet()?;

        let highlighter = self.highlighter();
        let mut fragments = self.diff_fragments(&steps, highlighter.as_ref())?;
        self.add_listings(&mut fragments, &steps, &chapters, highlighter.as_ref())?;

        let mut toc = TableOfContents::new(config.title.clone());
        for chapter in &chapters {
            let content = chapter.render(&fragments)?;
            let page = template.render(&escape_html(chapter.title()), &content)?;
            self.site().write(&chapter.html_file_name(), &page)?;

            toc.push(TocEntry::new(
                chapter.html_file_name(),
                chapter.title().to_string(),
            ));
        }

        let index = template.render(&escape_html(toc.title()), &toc.to_html())?;
        self.site().write(INDEX_FILE_NAME, &index)?;

        writeln!(
            self.writer(),
            "Built {} chapters from {} steps into {}",
            chapters.len(),
            steps.len(),
            self.site().path().display()
        )?;

        Ok(())
    }

    /// The input stylesheet followed by the CSS for the highlighting classes.
    fn write_stylesheet(&self) -> anyhow::Result<()> {
        let config = self.config();
        let stylesheet_path = config.stylesheet_path();

        let mut css = if stylesheet_path.is_file() {
            read_input(&stylesheet_path)?
        } else {
            log::debug!("no stylesheet at {}", stylesheet_path.display());
            String::new()
        };
        if config.highlight {
            if !css.is_empty() && !css.ends_with('\n') {
                css.push('\n');
            }
            css.push_str(&theme_css(&config.theme)?);
        }

        self.site().write(&config.stylesheet, &css)
    }

    /// The folded diff of every step against the one before it.
    fn diff_fragments(
        &self,
        steps: &StepList,
        highlighter: &dyn Highlighter,
    ) -> anyhow::Result<StepFragments> {
        let step_diff = StepDiff::new(self.workspace());
        let mut fragments = StepFragments::default();

        for (prev, step) in steps.pairs() {
            let patch = step_diff.patch(prev, step)?;
            let files = fold_diff(&patch, highlighter)?;
            log::debug!("{}: {} files changed", step.name(), files.len());

            fragments.insert_diff(&step.name().aliases(), &render_html(&files));
        }

        Ok(fragments)
    }

    /// Full listings, only for the steps some chapter asks for.
    fn add_listings(
        &self,
        fragments: &mut StepFragments,
        steps: &StepList,
        chapters: &[Chapter],
        highlighter: &dyn Highlighter,
    ) -> anyhow::Result<()> {
        let mut wanted = BTreeSet::new();
        for chapter in chapters {
            for placeholder in chapter.placeholders()? {
                if let Placeholder::Listing(alias) = placeholder {
                    wanted.insert(normalize_alias(&alias));
                }
            }
        }

        for alias in wanted {
            match steps.find(&alias) {
                Some((_, step)) => {
                    let html = render_listing(self.workspace(), step, highlighter)?;
                    fragments.insert_listing(&step.name().aliases(), &html);
                }
                None => log::warn!("no step named '{alias}' to list"),
            }
        }

        Ok(())
    }
}
