use crate::artifacts::fold::tree::{FoldTree, LineKind, Visit};
use crate::artifacts::highlight::Highlighter;
use crate::artifacts::highlight::plain::escape_html;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationLine {
    /// A clean section collapsed to its highlighted summary.
    Folded { markup: String },
    Line { kind: LineKind, markup: String },
}

impl PresentationLine {
    pub fn markup(&self) -> &str {
        match self {
            PresentationLine::Folded { markup } | PresentationLine::Line { markup, .. } => markup,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PresentationLine::Folded { .. } => "folded",
            PresentationLine::Line { kind, .. } => kind.css_class(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"line {}\">{}</div>",
            self.css_class(),
            self.markup()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RenderedFile {
    pub name: String,
    pub lines: Vec<PresentationLine>,
}

impl RenderedFile {
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<div class=\"diff\">\n");
        html.push_str(&format!(
            "<div class=\"filename\">{}</div>\n",
            escape_html(&self.name)
        ));
        html.push_str("<pre class=\"highlight\"><code>");
        for line in &self.lines {
            html.push_str(&line.to_html());
        }
        html.push_str("</code></pre>\n</div>\n");
        html
    }
}

/// Walk every file of the tree and emit its presentation lines.
///
/// Folded summaries are highlighted here, with the language of their file.
/// The tree is only read, so rendering it again gives the same output.
pub fn render(tree: &FoldTree, highlighter: &dyn Highlighter) -> Vec<RenderedFile> {
    tree.files()
        .iter()
        .map(|file| {
            let lines = tree
                .walk(file.root())
                .filter_map(|visit| match visit {
                    Visit::Folded(id) => Some(PresentationLine::Folded {
                        markup: highlighter.highlight(tree.section(id).summary(), file.language()),
                    }),
                    Visit::Line(id) => {
                        let line = tree.line(id);
                        (!line.is_omitted()).then(|| PresentationLine::Line {
                            kind: line.kind(),
                            markup: line.text().to_string(),
                        })
                    }
                })
                .collect();

            RenderedFile::new(tree.section(file.root()).summary().to_string(), lines)
        })
        .collect()
}

pub fn render_html(files: &[RenderedFile]) -> String {
    files.iter().map(RenderedFile::to_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::fold::builder::build_fold_tree;
    use crate::artifacts::fold::suppress::suppress_moves;
    use crate::artifacts::highlight::plain::{PlainHtml, Verbatim};
    use pretty_assertions::assert_eq;

    fn folded(text: &str) -> PresentationLine {
        PresentationLine::Folded {
            markup: text.to_string(),
        }
    }

    fn line(kind: LineKind, text: &str) -> PresentationLine {
        PresentationLine::Line {
            kind,
            markup: text.to_string(),
        }
    }

    fn rendered(body: &[&str]) -> Vec<PresentationLine> {
        let mut diff = vec!["--- a/kilo.c", "+++ b/kilo.c", "@@ -1,100 +1,100 @@"];
        diff.extend_from_slice(body);

        let mut tree = build_fold_tree(&diff.join("\n"), &Verbatim).unwrap();
        suppress_moves(&mut tree);

        let mut files = render(&tree, &Verbatim);
        assert_eq!(files.len(), 1);
        files.remove(0).lines
    }

    #[test]
    fn unchanged_file_renders_as_single_fold() {
        let lines = rendered(&[" /*** includes ***/", " #include <stdio.h>", " int x;"]);

        assert_eq!(lines, vec![folded("kilo.c")]);
    }

    #[test]
    fn clean_block_is_folded_with_closed_summary() {
        let lines = rendered(&[" void f() {", "   return;", " }", "+int x;"]);

        assert_eq!(
            lines,
            vec![folded("void f() { ... }"), line(LineKind::Added, "int x;")]
        );
    }

    #[test]
    fn dirty_block_is_expanded_around_change() {
        let lines = rendered(&[
            " /*** init ***/",
            " int main() {",
            "-  return 0;",
            "+  enableRawMode();",
            "+  return 0;",
            " }",
            " void g() {",
            " }",
        ]);

        assert_eq!(
            lines,
            vec![
                line(LineKind::Context, "/*** init ***/"),
                line(LineKind::Context, "int main() {"),
                line(LineKind::Added, "  enableRawMode();"),
                line(LineKind::Added, "  return 0;"),
                line(LineKind::Context, "}"),
                folded("void g() { ... }"),
            ]
        );
    }

    #[test]
    fn other_banners_stay_folded() {
        let lines = rendered(&[
            " /*** includes ***/",
            " #include <unistd.h>",
            "+#include <termios.h>",
            " /*** init ***/",
            " int main() {",
            " }",
        ]);

        assert_eq!(
            lines,
            vec![
                line(LineKind::Context, "/*** includes ***/"),
                line(LineKind::Context, "#include <unistd.h>"),
                line(LineKind::Added, "#include <termios.h>"),
                folded("/*** init ***/"),
            ]
        );
    }

    #[test]
    fn html_fragment_wraps_each_file() {
        let diff = [
            "--- a/kilo.c",
            "+++ b/kilo.c",
            "@@ -1 +1 @@",
            "-if (a < b)",
            "+if (a <= b)",
        ]
        .join("\n");
        let mut tree = build_fold_tree(&diff, &PlainHtml).unwrap();
        suppress_moves(&mut tree);

        let html = render_html(&render(&tree, &PlainHtml));

        assert_eq!(
            html,
            "<div class=\"diff\">\n\
             <div class=\"filename\">kilo.c</div>\n\
             <pre class=\"highlight\"><code>\
             <div class=\"line add\">if (a &lt;= b)</div>\
             </code></pre>\n\
             </div>\n"
        );
    }

    #[test]
    fn rendering_twice_is_identical() {
        let diff = [
            "--- a/kilo.c",
            "+++ b/kilo.c",
            "@@ -1,4 +1,4 @@",
            " void f() {",
            "-  a();",
            "+  b();",
            " }",
        ]
        .join("\n");
        let mut tree = build_fold_tree(&diff, &PlainHtml).unwrap();
        suppress_moves(&mut tree);

        let first = render_html(&render(&tree, &PlainHtml));
        let second = render_html(&render(&tree, &PlainHtml));

        assert_eq!(first, second);
    }
}
