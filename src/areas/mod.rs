//! Filesystem areas
//!
//! - `workspace`: the steps directory, one sub-directory per program snapshot
//! - `site`: the output directory the tutorial is written to
//! - `tutorial`: ties the areas, configuration and output writer together

pub mod site;
pub mod tutorial;
pub mod workspace;
