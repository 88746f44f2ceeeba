use crate::artifacts::highlight::plain::escape_html;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TocEntry {
    file_name: String,
    title: String,
}

/// Body of `index.html`: the book title and a numbered link per chapter.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TableOfContents {
    title: String,
    #[new(default)]
    entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn push(&mut self, entry: TocEntry) {
        self.entries.push(entry);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<h1>{}</h1>\n<h2>Table of Contents</h2>\n<ol>\n",
            escape_html(&self.title)
        );
        for entry in &self.entries {
            html.push_str(&format!(
                "<li><a href='{}'>{}</a></li>\n",
                escape_html(&entry.file_name),
                escape_html(&entry.title)
            ));
        }
        html.push_str("</ol>\n");
        html
    }
}
