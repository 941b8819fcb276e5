//! Git adapter for publishing the regenerated README.
//!
//! Three fixed commands run in order: `git add .`, `git commit -m <msg>`,
//! `git push`. The first failure stops the sequence; nothing is rolled back.

use anyhow::Result;
use tracing::{debug, instrument, warn};

use super::process::CommandRunner;
use crate::error::PreviewError;

/// Wrapper for executing git commands through a [`CommandRunner`].
#[derive(Debug, Clone)]
pub struct Git<R> {
    runner: R,
}

impl<R: CommandRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Stage everything under the working directory.
    pub fn add_all(&self) -> Result<String> {
        self.run_checked(&["add", "."])
    }

    /// Commit staged changes with a message.
    pub fn commit(&self, message: &str) -> Result<String> {
        self.run_checked(&["commit", "-m", message])
    }

    /// Push the current branch to its configured upstream.
    pub fn push(&self) -> Result<String> {
        self.run_checked(&["push"])
    }

    /// Stage, commit and push, handing each non-empty stdout to `on_output`.
    ///
    /// A successful commit followed by a failed push leaves the commit in
    /// place.
    #[instrument(skip_all)]
    pub fn publish(&self, message: &str, mut on_output: impl FnMut(&str)) -> Result<()> {
        let mut emit = |stdout: String| {
            let stdout = stdout.trim();
            if !stdout.is_empty() {
                on_output(stdout);
            }
        };
        emit(self.add_all()?);
        emit(self.commit(message)?);
        emit(self.push()?);
        debug!("publish complete");
        Ok(())
    }

    fn run_checked(&self, args: &[&str]) -> Result<String> {
        let output = self.runner.run("git", args)?;
        let command = format!("git {}", args.join(" "));
        if !output.success() {
            let stderr = if output.timed_out {
                "timed out".to_string()
            } else {
                output.stderr_text().trim_end().to_string()
            };
            warn!(%command, code = ?output.code, "git command failed");
            return Err(PreviewError::CommandFailed { command, stderr }.into());
        }
        debug!(%command, "git command succeeded");
        Ok(output.stdout_text())
    }
}
