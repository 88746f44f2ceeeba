//! Diff folding
//!
//! Turns a full-context unified diff into a tree of foldable sections and
//! renders it back out as presentation lines:
//!
//! - `tree`: arena of sections and diff lines, plus the dirty-aware walk
//! - `builder`: section-tree construction from raw diff lines
//! - `suppress`: hides removals that are immediately replaced by additions
//! - `render`: emits folded summaries for clean sections and lines for dirty ones

pub mod builder;
pub mod render;
pub mod suppress;
pub mod tree;

use crate::artifacts::fold::builder::build_fold_tree;
use crate::artifacts::fold::render::{RenderedFile, render};
use crate::artifacts::fold::suppress::suppress_moves;
use crate::artifacts::fold::tree::LineKind;
use crate::artifacts::highlight::Highlighter;

/// A whole-line section divider comment such as `/*** terminal ***/`.
pub const COMMENT_BANNER_REGEX: &str = r"^/\*\*\* (.+) \*\*\*/$";
pub const FILE_HEADER_PREFIX: &str = "+++ ";
pub const OLD_FILE_HEADER_PREFIX: &str = "--- ";
pub const HUNK_PREFIX: &str = "@@";
pub const NULL_PATH: &str = "/dev/null";
pub const FOLD_PLACEHOLDER: &str = " ... ";
pub const BLOCK_CLOSERS: [&str; 2] = ["}", "};"];

pub const LINE_MARKERS: phf::Map<char, LineKind> = phf::phf_map! {
    ' ' => LineKind::Context,
    '+' => LineKind::Added,
    '-' => LineKind::Removed,
};

/// Build, suppress and render in one go.
pub fn fold_diff(diff: &str, highlighter: &dyn Highlighter) -> anyhow::Result<Vec<RenderedFile>> {
    let mut tree = build_fold_tree(diff, highlighter)?;
    suppress_moves(&mut tree);

    Ok(render(&tree, highlighter))
}

#[cfg(test)]
mod tests {
    use crate::artifacts::fold::builder::build_fold_tree;
    use crate::artifacts::fold::render::{PresentationLine, render};
    use crate::artifacts::fold::suppress::suppress_moves;
    use crate::artifacts::fold::tree::{FoldTree, LineKind, Node, SectionId, Visit};
    use std::collections::HashSet;
    use crate::artifacts::highlight::plain::Verbatim;
    use proptest::prelude::*;

    const SOURCE_LINES: [&str; 10] = [
        "void f() {",
        "struct abuf {",
        "}",
        "};",
        "  x++;",
        "  }",
        "/*** terminal ***/",
        "int y;",
        "",
        "#include <stdio.h>",
    ];

    fn diff_line_strategy() -> impl Strategy<Value = String> {
        (prop::sample::select(vec![' ', '+', '-']), 0..SOURCE_LINES.len())
            .prop_map(|(marker, idx)| format!("{marker}{}", SOURCE_LINES[idx]))
    }

    fn context_line_strategy() -> impl Strategy<Value = String> {
        (0..SOURCE_LINES.len()).prop_map(|idx| format!(" {}", SOURCE_LINES[idx]))
    }

    fn diff_text(body: &[String]) -> String {
        let mut diff = vec![
            "diff --git a/1/kilo.c b/2/kilo.c".to_string(),
            "--- a/1/kilo.c".to_string(),
            "+++ b/2/kilo.c".to_string(),
            "@@ -1,1000 +1,1000 @@".to_string(),
        ];
        diff.extend_from_slice(body);
        diff.join("\n")
    }

    fn folded_tree(body: &[String]) -> FoldTree {
        let mut tree = build_fold_tree(&diff_text(body), &Verbatim).unwrap();
        suppress_moves(&mut tree);
        tree
    }

    fn contains_change(tree: &FoldTree, id: SectionId) -> bool {
        tree.section(id).children().iter().any(|node| match node {
            Node::Section(child) => contains_change(tree, *child),
            Node::Line(line) => tree.line(*line).kind().is_change(),
        })
    }

    proptest! {
        #[test]
        fn prop_dirty_sections_have_dirty_parents(body in prop::collection::vec(diff_line_strategy(), 0..60)) {
            let tree = folded_tree(&body);

            for (_, section) in tree.sections() {
                for node in section.children() {
                    if let Node::Section(child) = node {
                        if tree.section(*child).is_dirty() {
                            prop_assert!(section.is_dirty());
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_sections_holding_a_change_are_dirty(body in prop::collection::vec(diff_line_strategy(), 0..60)) {
            let tree = folded_tree(&body);

            for (id, section) in tree.sections() {
                if contains_change(&tree, id) {
                    prop_assert!(section.is_dirty());
                }
            }
        }

        #[test]
        fn prop_every_kept_change_is_rendered_once(body in prop::collection::vec(diff_line_strategy(), 0..60)) {
            let tree = folded_tree(&body);
            let files = render(&tree, &Verbatim);

            let mut rendered_changes = files
                .iter()
                .flat_map(|file| file.lines.iter())
                .filter_map(|line| match line {
                    PresentationLine::Line { kind, markup } if kind.is_change() => {
                        Some((*kind, markup.clone()))
                    }
                    _ => None,
                })
                .collect::<Vec<_>>();
            let mut kept_changes = tree
                .lines()
                .filter(|(_, line)| line.kind().is_change() && !line.is_omitted())
                .map(|(_, line)| (line.kind(), line.text().to_string()))
                .collect::<Vec<_>>();

            rendered_changes.sort_by_key(|(kind, markup)| (markup.clone(), kind.marker()));
            kept_changes.sort_by_key(|(kind, markup)| (markup.clone(), kind.marker()));
            prop_assert_eq!(rendered_changes, kept_changes);
        }

        #[test]
        fn prop_every_reachable_line_is_rendered_once_in_order(body in prop::collection::vec(diff_line_strategy(), 0..60)) {
            let tree = folded_tree(&body);
            let files = render(&tree, &Verbatim);
            prop_assert_eq!(files.len(), tree.files().len());

            for (file, rendered) in tree.files().iter().zip(&files) {
                let mut seen = HashSet::new();
                let mut reachable = Vec::new();
                for visit in tree.walk(file.root()) {
                    if let Visit::Line(id) = visit {
                        prop_assert!(seen.insert(id));
                        let line = tree.line(id);
                        if !line.is_omitted() {
                            reachable.push((line.kind(), line.text().to_string()));
                        }
                    }
                }

                let shown = rendered
                    .lines
                    .iter()
                    .filter_map(|line| match line {
                        PresentationLine::Line { kind, markup } => Some((*kind, markup.clone())),
                        PresentationLine::Folded { .. } => None,
                    })
                    .collect::<Vec<_>>();
                prop_assert_eq!(shown, reachable);
            }
        }

        #[test]
        fn prop_no_omitted_line_without_an_addition(body in prop::collection::vec(diff_line_strategy(), 0..60)) {
            let tree = folded_tree(&body);
            let any_addition = tree.lines().any(|(_, line)| line.kind() == LineKind::Added);

            for (_, line) in tree.lines() {
                if line.is_omitted() {
                    prop_assert_eq!(line.kind(), LineKind::Removed);
                    prop_assert!(any_addition);
                }
            }
        }

        #[test]
        fn prop_rendering_is_idempotent(body in prop::collection::vec(diff_line_strategy(), 0..60)) {
            let tree = folded_tree(&body);

            prop_assert_eq!(render(&tree, &Verbatim), render(&tree, &Verbatim));
        }

        #[test]
        fn prop_unchanged_diff_is_one_fold(body in prop::collection::vec(context_line_strategy(), 0..60)) {
            let tree = folded_tree(&body);
            let files = render(&tree, &Verbatim);

            prop_assert_eq!(files.len(), 1);
            prop_assert_eq!(
                &files[0].lines,
                &vec![PresentationLine::Folded { markup: "kilo.c".to_string() }]
            );
        }
    }
}
