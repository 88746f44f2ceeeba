use crate::artifacts::highlight::Language;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Context,
    Added,
    Removed,
}

impl LineKind {
    pub fn is_change(&self) -> bool {
        !matches!(self, LineKind::Context)
    }

    pub fn marker(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LineKind::Context => "nochange",
            LineKind::Added => "add",
            LineKind::Removed => "remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffLine {
    kind: LineKind,
    /// Markup produced by the highlighter, not raw source.
    text: String,
    #[new(default)]
    omit: bool,
}

impl DiffLine {
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_omitted(&self) -> bool {
        self.omit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    File,
    CommentBanner,
    BraceBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Section(SectionId),
    Line(LineId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    /// Raw source text shown in place of the section when it is folded.
    summary: String,
    children: Vec<Node>,
    dirty: bool,
}

impl Section {
    fn new(kind: SectionKind, summary: String) -> Self {
        Self {
            kind,
            summary,
            children: Vec::new(),
            dirty: false,
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// One diffed file: its root section and the language its lines were highlighted in.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileFold {
    root: SectionId,
    language: Language,
}

impl FileFold {
    pub fn root(&self) -> SectionId {
        self.root
    }

    pub fn language(&self) -> &Language {
        &self.language
    }
}

/// What a dirty-aware walk yields: clean sections stay closed, everything
/// under a dirty section is flattened in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Folded(SectionId),
    Line(LineId),
}

/// Arena holding every section and line of one diff.
///
/// Children refer to their nodes by index, so the tree needs no parent links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldTree {
    sections: Vec<Section>,
    lines: Vec<DiffLine>,
    files: Vec<FileFold>,
}

impl FoldTree {
    pub fn files(&self) -> &[FileFold] {
        &self.files
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }

    pub fn line(&self, id: LineId) -> &DiffLine {
        &self.lines[id.0]
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &Section)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(idx, section)| (SectionId(idx), section))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &DiffLine)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (LineId(idx), line))
    }

    /// Walk a subtree in document order without opening clean sections.
    pub fn walk(&self, from: SectionId) -> Walk<'_> {
        Walk {
            tree: self,
            pending: vec![Node::Section(from)],
        }
    }

    pub(crate) fn add_file(&mut self, summary: String, language: Language) -> SectionId {
        let root = self.push_section(SectionKind::File, summary);
        self.files.push(FileFold::new(root, language));
        root
    }

    pub(crate) fn add_section(
        &mut self,
        parent: SectionId,
        kind: SectionKind,
        summary: String,
    ) -> SectionId {
        let id = self.push_section(kind, summary);
        self.sections[parent.0].children.push(Node::Section(id));
        id
    }

    pub(crate) fn add_line(&mut self, parent: SectionId, line: DiffLine) -> LineId {
        let id = LineId(self.lines.len());
        self.lines.push(line);
        self.sections[parent.0].children.push(Node::Line(id));
        id
    }

    pub(crate) fn mark_dirty(&mut self, id: SectionId) {
        self.sections[id.0].dirty = true;
    }

    pub(crate) fn mark_omitted(&mut self, id: LineId) {
        self.lines[id.0].omit = true;
    }

    pub(crate) fn append_to_summary(&mut self, id: SectionId, text: &str) {
        self.sections[id.0].summary.push_str(text);
    }

    fn push_section(&mut self, kind: SectionKind, summary: String) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(Section::new(kind, summary));
        id
    }
}

pub struct Walk<'t> {
    tree: &'t FoldTree,
    // reversed: the next node to visit is at the end
    pending: Vec<Node>,
}

impl Iterator for Walk<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.pending.pop() {
            match node {
                Node::Line(id) => return Some(Visit::Line(id)),
                Node::Section(id) => {
                    let section = self.tree.section(id);
                    if !section.is_dirty() {
                        return Some(Visit::Folded(id));
                    }
                    self.pending.extend(section.children().iter().rev().copied());
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(kind: LineKind, text: &str) -> DiffLine {
        DiffLine::new(kind, text.to_string())
    }

    #[test]
    fn clean_root_is_walked_as_one_fold() {
        let mut tree = FoldTree::default();
        let root = tree.add_file("kilo.c".to_string(), Language::plain_text());
        tree.add_line(root, line(LineKind::Context, "a"));
        tree.add_line(root, line(LineKind::Context, "b"));

        let visits = tree.walk(root).collect::<Vec<_>>();

        assert_eq!(visits, vec![Visit::Folded(root)]);
    }

    #[test]
    fn dirty_sections_are_flattened_in_document_order() {
        let mut tree = FoldTree::default();
        let root = tree.add_file("kilo.c".to_string(), Language::plain_text());
        let first = tree.add_line(root, line(LineKind::Context, "a"));
        let block = tree.add_section(root, SectionKind::BraceBlock, "f() {".to_string());
        let inner = tree.add_line(block, line(LineKind::Added, "b"));
        let clean = tree.add_section(root, SectionKind::BraceBlock, "g() {".to_string());
        tree.add_line(clean, line(LineKind::Context, "c"));
        let last = tree.add_line(root, line(LineKind::Context, "d"));
        tree.mark_dirty(root);
        tree.mark_dirty(block);

        let visits = tree.walk(root).collect::<Vec<_>>();

        assert_eq!(
            visits,
            vec![
                Visit::Line(first),
                Visit::Line(inner),
                Visit::Folded(clean),
                Visit::Line(last),
            ]
        );
    }

    #[test]
    fn line_kind_presentation() {
        assert_eq!(LineKind::Context.css_class(), "nochange");
        assert_eq!(LineKind::Added.css_class(), "add");
        assert_eq!(LineKind::Removed.css_class(), "remove");
        assert_eq!(LineKind::Removed.marker(), '-');
        assert!(!LineKind::Context.is_change());
    }
}
