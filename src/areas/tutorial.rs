use crate::areas::site::Site;
use crate::areas::workspace::Workspace;
use crate::artifacts::highlight::Highlighter;
use crate::artifacts::highlight::classed::SyntectHighlighter;
use crate::artifacts::highlight::plain::PlainHtml;
use crate::config::Config;
use std::cell::{RefCell, RefMut};

pub struct Tutorial {
    config: Config,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    site: Site,
}

impl Tutorial {
    pub fn new(config: Config, writer: Box<dyn std::io::Write>) -> Self {
        let workspace = Workspace::new(config.steps_dir.clone().into_boxed_path());
        let site = Site::new(config.output_dir.clone().into_boxed_path());

        Tutorial {
            config,
            writer: RefCell::new(writer),
            workspace,
            site,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Highlighter for site pages: syntect classes, or escaping only when
    /// highlighting is turned off.
    pub fn highlighter(&self) -> Box<dyn Highlighter> {
        if self.config.highlight {
            Box::new(SyntectHighlighter::new())
        } else {
            Box::new(PlainHtml)
        }
    }
}
