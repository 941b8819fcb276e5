//! Orchestration for `previewer run`: update the README, then publish it.

use std::path::Path;

use anyhow::Result;
use tracing::{info, instrument};

use crate::io::config::PreviewConfig;
use crate::io::git::Git;
use crate::io::process::CommandRunner;
use crate::io::readme::ReadmeUpdate;
use crate::preview::update_from_root;

/// Update the README, report it, then stage, commit and push.
///
/// `report` receives the success line after the README is written and every
/// non-empty git stdout afterwards. Git never runs if the README update fails.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn run_publish<R: CommandRunner>(
    root: &Path,
    cfg: &PreviewConfig,
    git: &Git<R>,
    mut report: impl FnMut(&str),
) -> Result<ReadmeUpdate> {
    let update = update_from_root(root, cfg)?;
    info!(changed = update.changed, "readme updated");
    report(&format!("{} updated.", cfg.readme));
    git.publish(&cfg.git.commit_message, &mut report)?;
    Ok(update)
}
