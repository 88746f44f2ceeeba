//! Tutorial configuration
//!
//! Loaded from `stepwise.toml`. Every key is optional; relative directories are
//! resolved against the directory that holds the file.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "stepwise.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Heading of the table of contents page
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory holding the chapter markdown files
    #[serde(default = "default_book_dir")]
    pub book_dir: PathBuf,

    /// Directory holding one sub-directory per step
    #[serde(default = "default_steps_dir")]
    pub steps_dir: PathBuf,

    /// Static assets, page template and stylesheet
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Wiped and rewritten on every build
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// syntect theme used for the highlighting stylesheet
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_highlight")]
    pub highlight: bool,
}

fn default_title() -> String {
    "Build Your Own Text Editor".to_string()
}

fn default_book_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_steps_dir() -> PathBuf {
    PathBuf::from("../steps")
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("html_in")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("html_out")
}

fn default_template() -> String {
    "template.html".to_string()
}

fn default_stylesheet() -> String {
    "style.css".to_string()
}

fn default_theme() -> String {
    crate::artifacts::highlight::theme::DEFAULT_THEME.to_string()
}

fn default_highlight() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            book_dir: default_book_dir(),
            steps_dir: default_steps_dir(),
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            template: default_template(),
            stylesheet: default_stylesheet(),
            theme: default_theme(),
            highlight: default_highlight(),
        }
    }
}

impl Config {
    /// Load the config file at `path`, or `stepwise.toml` in the current
    /// directory. Without that file the defaults are used; a malformed file or
    /// an explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) if !path.is_file() => {
                anyhow::bail!("The config file does not exist: {}", path.display())
            }
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?.join(CONFIG_FILE_NAME),
        };

        if !path.is_file() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default().resolved_against(&std::env::current_dir()?));
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("loaded config from {}", path.display());

        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()?,
        };
        Ok(config.resolved_against(&base_dir))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn resolved_against(mut self, base_dir: &Path) -> Self {
        for dir in [
            &mut self.book_dir,
            &mut self.steps_dir,
            &mut self.input_dir,
            &mut self.output_dir,
        ] {
            if dir.is_relative() {
                *dir = base_dir.join(&*dir);
            }
        }

        self
    }

    pub fn template_path(&self) -> PathBuf {
        self.input_dir.join(&self.template)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.input_dir.join(&self.stylesheet)
    }

    pub fn with_book_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.book_dir = dir;
        }
        self
    }

    pub fn with_steps_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.steps_dir = dir;
        }
        self
    }

    pub fn with_input_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.input_dir = dir;
        }
        self
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}
