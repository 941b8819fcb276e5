//! Stable exit codes for previewer CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Any failure without a dedicated code (I/O, config, spawning git).
pub const FAILED: i32 = 1;
/// The README file does not exist.
pub const README_MISSING: i32 = 2;
/// The README lacks the markers or has them out of order.
pub const MALFORMED_README: i32 = 3;
/// An external command exited nonzero or timed out.
pub const COMMAND_FAILED: i32 = 4;
