//! Source highlighting
//!
//! The fold engine never tokenizes source itself. It asks a [`Highlighter`] for
//! markup, one line at a time:
//!
//! - `classed`: syntect backed, emits `<span class="...">` markup for the site
//! - `plain`: HTML escaping only, or the text untouched for terminal output
//! - `theme`: stylesheet generation for the classed markup

pub mod classed;
pub mod plain;
pub mod theme;

/// Language hint handed back to the highlighter for every line of a file.
///
/// `None` means plain text; it is what an unknown file name resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Language(Option<String>);

impl Language {
    pub fn plain_text() -> Self {
        Self(None)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_plain_text(&self) -> bool {
        self.0.is_none()
    }
}

pub trait Highlighter {
    fn guess_language(&self, file_name: &str) -> Language;

    /// Turn one line of source (no trailing newline) into presentation markup.
    fn highlight(&self, text: &str, language: &Language) -> String;
}
