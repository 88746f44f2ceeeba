//! Building blocks of a tutorial build
//!
//! - `step`: step directory names, aliases and ordering
//! - `diff`: full-context diffs between consecutive steps
//! - `fold`: the section tree that folds unchanged code out of a diff
//! - `highlight`: source highlighting behind a small trait
//! - `page`: chapters, templates and the table of contents
//! - `terminal`: coloured, paged output for the command line

pub mod diff;
pub mod fold;
pub mod highlight;
pub mod page;
pub mod step;
pub mod terminal;
