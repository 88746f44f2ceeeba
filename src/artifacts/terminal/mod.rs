//! Terminal output
//!
//! `show` prints the folded diff of a step the way the site would lay it out,
//! coloured, and through a pager when a person is reading it.

use crate::artifacts::fold::render::{PresentationLine, RenderedFile};
use crate::artifacts::fold::tree::LineKind;
use colored::Colorize;
use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

pub const FOLD_MARKER: &str = "⋯";

/// Feeds everything written to it into a minus pager.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page only an interactive stdout, and never when `NO_PAGER` is set.
pub fn should_page() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}

/// One rendered file as terminal lines: a bold file name, then every line with
/// its diff marker. Folded sections show their summary behind a `⋯`.
pub fn format_rendered_file(file: &RenderedFile) -> String {
    let mut text = format!("{}\n", file.name.bold());

    for line in &file.lines {
        let formatted = match line {
            PresentationLine::Folded { markup } => format!("{FOLD_MARKER}{markup}").dimmed(),
            PresentationLine::Line { kind, markup } => {
                let marked = format!("{}{}", kind.marker(), markup);
                match kind {
                    LineKind::Added => marked.green(),
                    LineKind::Removed => marked.red(),
                    LineKind::Context => marked.normal(),
                }
            }
        };
        text.push_str(&format!("{formatted}\n"));
    }

    text
}
