//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod head;
pub mod init;
pub mod resolve;
pub mod themes;

pub use args::{Cli, Commands, Format, ResolveArgs};
