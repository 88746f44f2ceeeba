//! Command implementations
//!
//! Each command is an `impl Tutorial` block writing its report to the
//! tutorial's writer:
//!
//! - `build`: renders every chapter and the index into the output directory
//! - `show`: prints the folded diff of one step to the terminal
//! - `steps`: lists the steps and the aliases they answer to

pub mod build;
pub mod show;
pub mod steps;
