//! Diffing between steps
//!
//! - `myers`: Myers' diff for line-by-line comparison
//! - `patch`: full-context unified diff text for one changed file
//! - `step_diff`: compares two step directories file by file

pub mod myers;
pub mod patch;
pub mod step_diff;
