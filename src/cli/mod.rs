//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod paths;

pub use args::{BuildArgs, CheckArgs, Cli, Commands, PathsArgs};
