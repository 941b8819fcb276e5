//! Typed failures that map onto stable exit codes.
//!
//! Everything else (I/O, config parsing, spawning processes) travels as a
//! plain `anyhow::Error` with context.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Which marker rule a README violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerProblem {
    StartMissing,
    EndMissing,
    OutOfOrder,
}

impl fmt::Display for MarkerProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MarkerProblem::StartMissing => "start marker not found",
            MarkerProblem::EndMissing => "end marker not found",
            MarkerProblem::OutOfOrder => "end marker appears before start marker",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("{} not found", .0.display())]
    ReadmeMissing(PathBuf),

    #[error("README must contain '{start}' followed by '{end}' ({problem})")]
    MalformedReadme {
        start: String,
        end: String,
        problem: MarkerProblem,
    },

    #[error("command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },
}

impl PreviewError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PreviewError::ReadmeMissing(_) => exit_codes::README_MISSING,
            PreviewError::MalformedReadme { .. } => exit_codes::MALFORMED_README,
            PreviewError::CommandFailed { .. } => exit_codes::COMMAND_FAILED,
        }
    }
}

/// Exit code for an error chain, falling back to [`exit_codes::FAILED`].
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<PreviewError>())
        .map_or(exit_codes::FAILED, PreviewError::exit_code)
}
