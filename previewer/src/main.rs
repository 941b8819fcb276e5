//! Regenerates the README "Preview" section from image folders and publishes
//! it with git.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use previewer::core::types::{FolderImages, SortBy};
use previewer::error::exit_code_for;
use previewer::io::config::{CONFIG_FILE, PreviewConfig, load_config};
use previewer::io::git::Git;
use previewer::io::process::SystemRunner;
use previewer::logging;
use previewer::preview::{build_section, collect_folders, update_from_root};
use previewer::publish::run_publish;

#[derive(Parser)]
#[command(
    name = "previewer",
    version,
    about = "Regenerate a README image preview section and publish it with git"
)]
struct Cli {
    /// Repository root containing the README and image folders.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to `previewer.toml` under the root).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override `max_images_per_section`.
    #[arg(long, global = true)]
    max_images: Option<usize>,

    /// Override `sort_by`.
    #[arg(long, global = true, value_enum)]
    sort_by: Option<SortBy>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Update the README, then `git add .`, `git commit` and `git push` (default).
    Run,
    /// Update the README only.
    Update,
    /// Print the generated section without touching any file.
    Preview,
    /// List the images each folder contributes.
    List {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    let root = cli.root.as_path();
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => cmd_run(root, &cfg),
        Command::Update => cmd_update(root, &cfg),
        Command::Preview => cmd_preview(root, &cfg),
        Command::List { json } => cmd_list(root, &cfg, json),
    }
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<PreviewConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(CONFIG_FILE));
    let mut cfg = load_config(&path)?;
    if let Some(max_images) = cli.max_images {
        cfg.max_images_per_section = max_images;
    }
    if let Some(sort_by) = cli.sort_by {
        cfg.sort_by = sort_by;
    }
    cfg.validate().context("invalid command-line override")?;
    Ok(cfg)
}

fn cmd_run(root: &Path, cfg: &PreviewConfig) -> Result<()> {
    let git = Git::new(SystemRunner::new(root, cfg.git.command_timeout()));
    run_publish(root, cfg, &git, |line| println!("{line}"))?;
    Ok(())
}

fn cmd_update(root: &Path, cfg: &PreviewConfig) -> Result<()> {
    update_from_root(root, cfg)?;
    println!("{} updated.", cfg.readme);
    Ok(())
}

fn cmd_preview(root: &Path, cfg: &PreviewConfig) -> Result<()> {
    print!("{}", build_section(root, cfg)?);
    Ok(())
}

fn cmd_list(root: &Path, cfg: &PreviewConfig, json: bool) -> Result<()> {
    let folders = collect_folders(root, cfg)?;
    if json {
        let payload = serde_json::to_string_pretty(&folders).context("serialize json")?;
        println!("{payload}");
    } else {
        print!("{}", format_listing(&folders));
    }
    Ok(())
}

fn format_listing(folders: &[FolderImages]) -> String {
    let mut out = String::new();
    for folder in folders {
        out.push_str(&format!(
            "{} ({}): {}\n",
            folder.label,
            folder.dir,
            folder.images.len()
        ));
        for image in &folder.images {
            out.push_str(&format!("  {}\n", image.link_target()));
        }
    }
    out
}
