//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod options;
pub mod robots;

pub use args::{Cli, Commands, OptionsArgs};
