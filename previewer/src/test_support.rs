//! Test-only helpers: scratch git repositories and a scripted command runner.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::io::process::{CommandOutput, CommandRunner};

/// Temporary git repository with a local identity configured.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let repo = Self { dir };
        repo.git(&["init", "--quiet"])?;
        repo.git(&["config", "user.email", "previewer@example.com"])?;
        repo.git(&["config", "user.name", "Previewer Tests"])?;
        repo.git(&["config", "commit.gpgsign", "false"])?;
        Ok(repo)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the repository root, creating parents.
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }

    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.root().join(rel);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }

    /// Run git in the repository, returning stdout.
    pub fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.root())
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))?;
        if !output.status.success() {
            return Err(anyhow!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Number of commits reachable from HEAD (0 for an unborn branch).
    pub fn commit_count(&self) -> Result<usize> {
        match self.git(&["rev-list", "--count", "HEAD"]) {
            Ok(out) => out.trim().parse().context("parse commit count"),
            Err(_) => Ok(0),
        }
    }
}

/// Records every invocation and answers from a script keyed by the first
/// argument (e.g. `"push"`).
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    calls: RefCell<Vec<String>>,
    failures: Vec<(String, String)>,
    stdouts: Vec<(String, String)>,
    timeouts: Vec<String>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit with code 1 and `stderr` when the first argument is `subcommand`.
    pub fn fail_on(mut self, subcommand: &str, stderr: &str) -> Self {
        self.failures
            .push((subcommand.to_string(), stderr.to_string()));
        self
    }

    pub fn stdout_for(mut self, subcommand: &str, stdout: &str) -> Self {
        self.stdouts
            .push((subcommand.to_string(), stdout.to_string()));
        self
    }

    pub fn time_out_on(mut self, subcommand: &str) -> Self {
        self.timeouts.push(subcommand.to_string());
        self
    }

    /// Invocations so far, formatted as `program arg1 arg2`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.borrow_mut().push(line);

        let key = args.first().copied().unwrap_or_default();
        let lookup = |table: &[(String, String)]| {
            table
                .iter()
                .find(|(sub, _)| sub == key)
                .map(|(_, text)| text.clone())
        };

        if self.timeouts.iter().any(|sub| sub == key) {
            return Ok(CommandOutput {
                timed_out: true,
                ..CommandOutput::default()
            });
        }
        if let Some(stderr) = lookup(&self.failures) {
            return Ok(CommandOutput {
                code: Some(1),
                stderr: stderr.into_bytes(),
                ..CommandOutput::default()
            });
        }
        Ok(CommandOutput {
            code: Some(0),
            stdout: lookup(&self.stdouts).unwrap_or_default().into_bytes(),
            ..CommandOutput::default()
        })
    }
}
