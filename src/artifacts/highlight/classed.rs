use crate::artifacts::highlight::plain::escape_html;
use crate::artifacts::highlight::{Highlighter, Language};
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Class style shared by the markup and the generated stylesheet.
pub const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Highlights lines with syntect's bundled grammars, emitting class based spans.
///
/// Every line is highlighted on its own, so constructs spanning several lines
/// (block comments, multi-line strings) are only coloured line by line.
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
}

impl std::fmt::Debug for SyntectHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectHighlighter")
            .field("syntaxes", &self.syntax_set.syntaxes().len())
            .finish()
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    fn syntax_for(&self, language: &Language) -> &SyntaxReference {
        language
            .name()
            .and_then(|name| self.syntax_set.find_syntax_by_name(name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

impl Highlighter for SyntectHighlighter {
    fn guess_language(&self, file_name: &str) -> Language {
        let path = Path::new(file_name);
        let extension = path.extension().and_then(|ext| ext.to_str());
        let base_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file_name);

        // extension first, then the whole name for files like `Makefile`
        extension
            .and_then(|ext| self.syntax_set.find_syntax_by_extension(ext))
            .or_else(|| self.syntax_set.find_syntax_by_extension(base_name))
            .filter(|syntax| syntax.name != self.syntax_set.find_syntax_plain_text().name)
            .map(|syntax| Language::named(syntax.name.clone()))
            .unwrap_or_default()
    }

    fn highlight(&self, text: &str, language: &Language) -> String {
        let syntax = self.syntax_for(language);
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        match generator.parse_html_for_line_which_includes_newline(&format!("{text}\n")) {
            Ok(()) => generator.finalize().replace('\n', ""),
            Err(e) => {
                log::warn!(
                    "highlighting failed for {:?} line, falling back to plain text: {}",
                    syntax.name,
                    e
                );
                escape_html(text)
            }
        }
    }
}
