use crate::artifacts::fold::tree::{DiffLine, FoldTree, LineKind, SectionId, SectionKind};
use crate::artifacts::fold::{
    BLOCK_CLOSERS, COMMENT_BANNER_REGEX, FILE_HEADER_PREFIX, FOLD_PLACEHOLDER, HUNK_PREFIX,
    LINE_MARKERS, NULL_PATH, OLD_FILE_HEADER_PREFIX,
};
use crate::artifacts::highlight::{Highlighter, Language};
use anyhow::Context;
use regex::Regex;
use std::path::Path;

/// Build the fold tree for a complete diff text.
pub fn build_fold_tree(diff: &str, highlighter: &dyn Highlighter) -> anyhow::Result<FoldTree> {
    let mut builder = FoldTreeBuilder::new(highlighter)?;
    diff.lines().for_each(|line| builder.push_line(line));

    Ok(builder.finish())
}

/// Consumes a unified diff line by line and grows a [`FoldTree`].
///
/// The open sections are kept as a stack of arena ids: the first entry is the
/// current file, the last one is where the next line goes.
pub struct FoldTreeBuilder<'h> {
    highlighter: &'h dyn Highlighter,
    banner: Regex,
    tree: FoldTree,
    stack: Vec<SectionId>,
    in_diff: bool,
    language: Language,
    old_path: Option<String>,
}

impl<'h> FoldTreeBuilder<'h> {
    pub fn new(highlighter: &'h dyn Highlighter) -> anyhow::Result<Self> {
        let banner = Regex::new(COMMENT_BANNER_REGEX)
            .with_context(|| format!("invalid comment banner regex: {COMMENT_BANNER_REGEX}"))?;

        Ok(Self {
            highlighter,
            banner,
            tree: FoldTree::default(),
            stack: Vec::new(),
            in_diff: false,
            language: Language::plain_text(),
            old_path: None,
        })
    }

    pub fn push_line(&mut self, line: &str) {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if !self.in_diff {
            if let Some(path) = line.strip_prefix(OLD_FILE_HEADER_PREFIX) {
                // a new file pair starts; nothing belongs to the previous file anymore
                self.old_path = Some(path.to_string());
                self.stack.clear();
                return;
            }
            if let Some(path) = line.strip_prefix(FILE_HEADER_PREFIX) {
                self.open_file(path);
                return;
            }
        }

        if line.starts_with(HUNK_PREFIX) {
            self.in_diff = true;
            return;
        }

        if self.in_diff {
            let mut chars = line.chars();
            if let Some(kind) = chars.next().and_then(|marker| LINE_MARKERS.get(&marker)) {
                self.push_content(*kind, chars.as_str());
                return;
            }
        }

        self.in_diff = false;
    }

    pub fn finish(self) -> FoldTree {
        self.tree
    }

    fn open_file(&mut self, path: &str) {
        let path = path.trim_end();
        // deleted files point at /dev/null; their old name is the useful one
        let path = match (path, self.old_path.take()) {
            (NULL_PATH, Some(old_path)) => old_path,
            (path, _) => path.to_string(),
        };

        if path.is_empty() || path == NULL_PATH {
            log::debug!("ignoring diff header without a usable path");
            self.stack.clear();
            return;
        }

        let file_name = Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or(path);

        self.language = self.highlighter.guess_language(&file_name);
        let root = self.tree.add_file(file_name, self.language.clone());
        self.stack = vec![root];
    }

    fn push_content(&mut self, kind: LineKind, text: &str) {
        if self.stack.is_empty() {
            return;
        }

        let markup = self.highlighter.highlight(text, &self.language);

        if kind.is_change() {
            self.mark_open_sections_dirty();
        }

        if self.is_comment_banner(text) {
            self.stack.truncate(1);
            self.open_section(SectionKind::CommentBanner, text.to_string());
        } else if opens_block(text) {
            if self.stack.len() > 1 && self.innermost_kind() == Some(SectionKind::BraceBlock) {
                self.stack.pop();
            }
            self.open_section(
                SectionKind::BraceBlock,
                format!("{text}{FOLD_PLACEHOLDER}"),
            );
        }

        if let Some(&innermost) = self.stack.last() {
            self.tree.add_line(innermost, DiffLine::new(kind, markup));
        }

        if let Some(closer) = closing_brace(text) {
            if self.innermost_kind() == Some(SectionKind::BraceBlock) {
                if let Some(block) = self.stack.pop() {
                    self.tree.append_to_summary(block, closer);
                }
            }
        }

        // again, so a section opened by this very line is flagged too
        if kind.is_change() {
            self.mark_open_sections_dirty();
        }
    }

    fn is_comment_banner(&self, text: &str) -> bool {
        self.banner.is_match(text)
    }

    fn open_section(&mut self, kind: SectionKind, summary: String) {
        if let Some(&parent) = self.stack.last() {
            let id = self.tree.add_section(parent, kind, summary);
            self.stack.push(id);
        }
    }

    fn innermost_kind(&self) -> Option<SectionKind> {
        self.stack
            .last()
            .map(|&id| self.tree.section(id).kind())
    }

    fn mark_open_sections_dirty(&mut self) {
        for &id in &self.stack {
            self.tree.mark_dirty(id);
        }
    }
}

/// Only unindented lines open a block: top-level definitions, not the
/// `if`/`while` bodies inside them.
fn opens_block(text: &str) -> bool {
    let starts_at_margin = text.chars().next().is_some_and(|c| !c.is_whitespace());

    starts_at_margin && text.ends_with('{')
}

fn closing_brace(text: &str) -> Option<&str> {
    BLOCK_CLOSERS.iter().copied().find(|closer| *closer == text)
}
