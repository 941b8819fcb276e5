//! Keeps the "Preview" section of a README in sync with image folders.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (ordering, rendering, marker
//!   splicing). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting adapters (config file, directory scan, README
//!   file, process execution, git).
//!
//! Orchestration modules ([`preview`], [`publish`]) coordinate core logic with
//! I/O to implement CLI commands.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod preview;
pub mod publish;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
