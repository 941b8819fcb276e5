//! I/O adapters for previewer commands.

pub mod config;
pub mod git;
pub mod process;
pub mod readme;
pub mod scan;
