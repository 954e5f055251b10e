//! CLI tests for the gen-placeholders binary

use std::path::Path;
use std::process::{Command, Output};

use gen_placeholders::planned_paths;
use tempfile::tempdir;

fn run(resources: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gen-placeholders"))
        .arg("--resources")
        .arg(resources)
        .args(args)
        .output()
        .expect("Failed to run gen-placeholders")
}

#[test]
fn test_default_command_generates_everything() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = run(dir.path(), &[]);
    assert!(output.status.success(), "gen-placeholders failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating images..."));
    assert!(stdout.contains("Generating fonts..."));
    assert!(stdout.contains("Generating audio..."));
    assert!(stdout.contains("[IMG] images/main_menu_bg.jpg  (1280x720 JPEG)"));
    assert!(stdout.contains("[TTF] fonts/ui_font.ttf"));
    assert!(stdout.contains("[WAV] sounds/effects.wav  (1s silence)"));
    assert!(stdout.contains("[MP3] sounds/bgm.mp3"));
    assert!(stdout.trim_end().ends_with("Done. All placeholder resources generated."));

    assert!(planned_paths().all(|rel| dir.path().join(rel).is_file()));
}

#[test]
fn test_list_does_not_write() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = run(dir.path(), &["list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 40);
    assert!(!dir.path().join("images").exists());
}

#[test]
fn test_clean_after_all() {
    let dir = tempdir().expect("Failed to create temp dir");
    assert!(run(dir.path(), &["all"]).status.success());

    let output = run(dir.path(), &["clean"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Removed 40 files"));
    assert!(planned_paths().all(|rel| !dir.path().join(rel).exists()));
}

#[test]
fn test_failure_exits_nonzero() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let output = run(&blocker, &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to generate resources"));
}
