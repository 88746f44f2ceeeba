use crate::artifacts::page::fragments::StepFragments;
use crate::artifacts::page::{CHAPTER_EXTENSION, LISTING_PREFIX, PLACEHOLDER_REGEX, TITLE_REGEX};
use anyhow::Context;
use pulldown_cmark::{Parser, html::push_html};
use regex::Regex;
use std::path::{Path, PathBuf};

/// What a `<p>{{...}}</p>` paragraph asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Diff(String),
    Listing(String),
}

impl Placeholder {
    pub fn parse(name: &str) -> Self {
        match name.strip_prefix(LISTING_PREFIX) {
            Some(alias) => Placeholder::Listing(alias.to_string()),
            None => Placeholder::Diff(name.to_string()),
        }
    }

    pub fn alias(&self) -> &str {
        match self {
            Placeholder::Diff(alias) | Placeholder::Listing(alias) => alias,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    name: String,
    title: String,
    markdown: String,
}

impl Chapter {
    /// Every chapter file directly inside `book_dir`, sorted by file name.
    pub fn list(book_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(book_dir)
            .with_context(|| format!("Failed to read book directory {}", book_dir.display()))?
        {
            let path = entry?.path();
            let is_chapter = path
                .extension()
                .is_some_and(|ext| ext == CHAPTER_EXTENSION);
            if path.is_file() && is_chapter {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| anyhow::anyhow!("invalid chapter file name: {}", path.display()))?
            .to_string();
        let markdown = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chapter {}", path.display()))?;

        Self::new(name, markdown)
    }

    pub fn new(name: String, markdown: String) -> anyhow::Result<Self> {
        let title_re = Regex::new(TITLE_REGEX)
            .with_context(|| format!("invalid title regex: {TITLE_REGEX}"))?;
        let title = title_re
            .captures(&markdown)
            .map(|captures| captures[1].trim().to_string())
            .unwrap_or_else(|| name.clone());

        Ok(Self {
            name,
            title,
            markdown,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.name)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        push_html(&mut html, Parser::new(&self.markdown));
        html
    }

    /// Placeholders the rendered chapter refers to, in document order.
    pub fn placeholders(&self) -> anyhow::Result<Vec<Placeholder>> {
        let re = placeholder_regex()?;
        let html = self.to_html();

        Ok(re
            .captures_iter(&html)
            .map(|captures| Placeholder::parse(&captures[1]))
            .collect())
    }

    /// The chapter body with every placeholder paragraph replaced by its
    /// fragment. Placeholders without a fragment are dropped.
    pub fn render(&self, fragments: &StepFragments) -> anyhow::Result<String> {
        let re = placeholder_regex()?;
        let html = self.to_html();

        let body = re.replace_all(&html, |captures: &regex::Captures| {
            let placeholder = Placeholder::parse(&captures[1]);
            match fragments.get(&placeholder) {
                Some(fragment) => fragment.to_string(),
                None => {
                    log::warn!(
                        "{}: no step named '{}'",
                        self.name,
                        placeholder.alias()
                    );
                    String::new()
                }
            }
        });

        Ok(body.into_owned())
    }
}

fn placeholder_regex() -> anyhow::Result<Regex> {
    Regex::new(PLACEHOLDER_REGEX)
        .with_context(|| format!("invalid placeholder regex: {PLACEHOLDER_REGEX}"))
}
