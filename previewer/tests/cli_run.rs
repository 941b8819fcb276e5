//! CLI tests for the previewer binary.
//!
//! Spawns the binary against scratch directories and git repositories and
//! checks exit codes, stdout and the resulting README.

use std::fs;
use std::process::{Command, Output};

use previewer::exit_codes;
use previewer::test_support::TestRepo;

const README: &str = "# Wallpapers\n\nSome intro.\n\n### Preview\n\nold previews\n\n### Source\n\nAll images by me.\n";

fn previewer(root: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_previewer"))
        .current_dir(root)
        .args(args)
        .output()
        .expect("spawn previewer")
}

fn seed(repo: &TestRepo) {
    repo.write("README.md", README).expect("readme");
    repo.write("Horizontal/b.png", b"png").expect("image");
    repo.write("Horizontal/a.jpg", b"jpg").expect("image");
    fs::create_dir_all(repo.root().join("Vertical")).expect("mkdir");
}

#[test]
fn update_rewrites_preview_section() {
    let repo = TestRepo::new().expect("repo");
    seed(&repo);

    let out = previewer(repo.root(), &["update"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "README.md updated.\n");
    assert_eq!(
        repo.read("README.md").expect("read"),
        "# Wallpapers\n\nSome intro.\n\n### Preview\n\n#### Wide\n\n![a.jpg](./Horizontal/a.jpg)\n![b.png](./Horizontal/b.png)\n\n### Source\n\nAll images by me.\n"
    );
}

#[test]
fn preview_prints_without_writing() {
    let repo = TestRepo::new().expect("repo");
    seed(&repo);

    let out = previewer(repo.root(), &["preview"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "### Preview\n\n#### Wide\n\n![a.jpg](./Horizontal/a.jpg)\n![b.png](./Horizontal/b.png)\n\n"
    );
    assert_eq!(repo.read("README.md").expect("read"), README);
}

#[test]
fn missing_readme_exits_with_dedicated_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = previewer(temp.path(), &["update"]);
    assert_eq!(out.status.code(), Some(exit_codes::README_MISSING));
    assert!(String::from_utf8_lossy(&out.stderr).contains("README.md not found"));
}

#[test]
fn malformed_readme_exits_and_is_untouched() {
    let repo = TestRepo::new().expect("repo");
    let content = "### Source\n\n### Preview\n";
    repo.write("README.md", content).expect("readme");

    let out = previewer(repo.root(), &[]);
    assert_eq!(out.status.code(), Some(exit_codes::MALFORMED_README));
    assert_eq!(repo.read("README.md").expect("read"), content);
    assert_eq!(repo.commit_count().expect("count"), 0);
}

#[test]
fn push_failure_reports_push_after_commit() {
    let repo = TestRepo::new().expect("repo");
    seed(&repo);

    let out = previewer(repo.root(), &["run"]);
    assert_eq!(out.status.code(), Some(exit_codes::COMMAND_FAILED));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("git push"), "stderr: {stderr}");
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("README.md updated.\n"));
    assert_eq!(repo.commit_count().expect("count"), 1);
}

#[test]
fn run_pushes_to_remote() {
    let repo = TestRepo::new().expect("repo");
    seed(&repo);
    let remote = tempfile::tempdir().expect("remote dir");
    let remote_path = remote.path().to_string_lossy().into_owned();
    repo.git(&["init", "--quiet", "--bare", &remote_path])
        .expect("init bare");
    repo.git(&["remote", "add", "origin", &remote_path])
        .expect("add remote");
    repo.git(&["config", "push.default", "current"])
        .expect("push.default");

    let out = previewer(repo.root(), &[]);
    assert_eq!(
        out.status.code(),
        Some(exit_codes::OK),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let pushed = repo
        .git(&["--git-dir", &remote_path, "rev-list", "--all", "--count"])
        .expect("count remote commits");
    assert_eq!(pushed.trim(), "1");
}

#[test]
fn list_json_reports_every_folder() {
    let repo = TestRepo::new().expect("repo");
    seed(&repo);

    let out = previewer(repo.root(), &["list", "--json"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    let listing: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(listing[0]["label"], "Wide");
    assert_eq!(listing[0]["images"][0]["rel_path"], "Horizontal/a.jpg");
    assert_eq!(listing[1]["dir"], "Vertical");
    assert_eq!(listing[1]["images"].as_array().map(Vec::len), Some(0));
}

#[test]
fn config_file_changes_folders_and_cap() {
    let repo = TestRepo::new().expect("repo");
    seed(&repo);
    repo.write("Square/one.png", b"png").expect("image");
    repo.write("Square/two.png", b"png").expect("image");
    repo.write(
        "previewer.toml",
        "max_images_per_section = 1\n\n[[folders]]\ndir = \"Square\"\nlabel = \"Square\"\n",
    )
    .expect("config");

    let out = previewer(repo.root(), &["preview"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "### Preview\n\n#### Square\n\n![one.png](./Square/one.png)\n\n"
    );
}
