use crate::artifacts::highlight::{Highlighter, Language};

/// Escapes the text for HTML and adds no markup of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHtml;

impl Highlighter for PlainHtml {
    fn guess_language(&self, _file_name: &str) -> Language {
        Language::plain_text()
    }

    fn highlight(&self, text: &str, _language: &Language) -> String {
        escape_html(text)
    }
}

/// Leaves the text as is. Used when the output is a terminal, not a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Highlighter for Verbatim {
    fn guess_language(&self, _file_name: &str) -> Language {
        Language::plain_text()
    }

    fn highlight(&self, text: &str, _language: &Language) -> String {
        text.to_string()
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
