/// CLI layer: argument parsing, output formatting, session persistence.
pub mod args;
pub mod output;
pub mod session;

pub use args::{Cli, Command};
