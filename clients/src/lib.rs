//! Front-end plumbing for the `orbits` binary: argument parsing, config-file
//! merging and interactive prompting.

pub mod cli;
pub mod prompt;

pub use cli::{Args, Draft, OutputFormat};
pub use prompt::Prompter;
