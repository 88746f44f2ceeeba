//! Tutorial pages
//!
//! Chapters are markdown files. A paragraph that holds nothing but a
//! `{{step}}` placeholder is swapped for the folded diff of that step, and
//! `{{listing:step}}` for the step's complete source.
//!
//! - `chapter`: one markdown chapter and its placeholders
//! - `fragments`: rendered step HTML, keyed by alias
//! - `listing`: highlighted full source of a step
//! - `template`: the page skeleton every chapter is wrapped in
//! - `toc`: the index page

pub mod chapter;
pub mod fragments;
pub mod listing;
pub mod template;
pub mod toc;

pub const PLACEHOLDER_REGEX: &str = r"<p>\{\{([\w:-]+)\}\}</p>";
pub const TITLE_REGEX: &str = r"(?m)^# (.+)$";
pub const TEMPLATE_SLOT_REGEX: &str = r"\{\{(title|content)\}\}";
pub const LISTING_PREFIX: &str = "listing:";
pub const CHAPTER_EXTENSION: &str = "md";
