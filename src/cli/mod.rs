//! Command-line surface: argument parsing and the leveled-display macros
//! the binary entry point in `src/main.rs` uses to report results and
//! errors.

pub mod args;
pub mod constants;
