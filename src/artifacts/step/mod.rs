//! Tutorial steps
//!
//! A step is a directory holding one snapshot of the tutorial's program, named
//! `<number>` or `<number>-<slug>`. Steps are ordered by number and each one is
//! diffed against the step before it.

pub mod step_list;
pub mod step_name;

pub const STEP_NAME_REGEX: &str = r"^(\d+)(?:-([\w-]+))?$";
