#![allow(clippy::unwrap_used)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;
use std::fs;
use std::path::Path;

fn write_config(root: &Path, playlists: &str) -> std::path::PathBuf {
    let config = root.join("config.yaml");
    fs::write(
        &config,
        format!(
            "settings:\n  musicDir: {}\n  targetDir: {}\n  sorted: true\nplaylists:\n{}",
            root.join("music").display(),
            root.join("out").display(),
            playlists
        ),
    )
    .unwrap();
    config
}

fn add_file(root: &Path, relative: &str, content: &str) {
    let path = root.join("music").join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_search_and_convert_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let music_dir = format!("{}/", root.join("music").display());
    add_file(root, "a.mp3", "");
    add_file(root, "sub/b.flac", "");
    add_file(root, "imports/list.m3u", &format!("#EXTM3U\r\n{music_dir}a.mp3\r\n\r\n{music_dir}sub/b.flac"));
    let config = write_config(
        root,
        "  - name: all\n    type: search\n  - name: lists\n    type: convert\n    dir: imports\n",
    );

    let out = root.join("out");
    let mut cmd = cargo_bin_cmd!("m3ugen");
    cmd.env_remove("M3UGEN_CONFIG")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "wrote 2 to {}",
            out.join("all.m3u").display()
        )))
        .stdout(predicate::str::contains(format!(
            "wrote 2 to {}",
            out.join("list.m3u").display()
        )));

    assert_eq!(fs::read_to_string(out.join("all.m3u")).unwrap(), "a.mp3\nsub/b.flac");
    assert_eq!(fs::read_to_string(out.join("list.m3u")).unwrap(), "a.mp3\nsub/b.flac");
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_file(root, "a.mp3", "");
    let config = write_config(root, "  - name: all\n    type: search\n");

    let mut cmd = cargo_bin_cmd!("m3ugen");
    cmd.env_remove("M3UGEN_CONFIG")
        .arg("--dry-run")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 1 to"));

    assert!(!root.join("out").exists());
}

#[test]
fn test_unknown_playlist_type_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_file(root, "a.mp3", "");
    let config = write_config(root, "  - name: odd\n    type: shuffle\n");

    let mut cmd = cargo_bin_cmd!("m3ugen");
    cmd.env_remove("M3UGEN_CONFIG")
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown type 'shuffle'"));

    assert!(!root.join("out").exists());
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("m3ugen");
    cmd.env_remove("M3UGEN_CONFIG")
        .arg(dir.path().join("absent.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_missing_search_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_file(root, "a.mp3", "");
    let config = write_config(root, "  - name: gone\n    type: search\n    dirs: [nowhere]\n");

    let mut cmd = cargo_bin_cmd!("m3ugen");
    cmd.env_remove("M3UGEN_CONFIG")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_completions() {
    let mut cmd = cargo_bin_cmd!("m3ugen");
    cmd.args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("m3ugen"));
}
