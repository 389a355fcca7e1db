use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};
use tempfile::tempdir;

fn iconpad(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_iconpad"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn run_in(dir: &Path) -> Output {
    iconpad(dir).output().expect("spawn iconpad")
}

#[test]
fn test_pads_assets_icon() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    let icon = dir.path().join("assets").join("icon.png");
    RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]))
        .save(&icon)
        .unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully added padding to assets/icon.png"));

    let padded = image::open(&icon).unwrap();
    assert_eq!((padded.width(), padded.height()), (140, 140));
}

#[test]
fn test_missing_icon_exits_with_one() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error"));
    assert!(!dir.path().join("assets").join("icon.png").exists());
}

#[test]
fn test_error_printed_with_logging_off() {
    let dir = tempdir().unwrap();

    let output = iconpad(dir.path())
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn iconpad");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: Failed to pad icon"));
    assert!(stdout.contains("assets/icon.png"));
}

#[test]
fn test_stray_argument_rejected() {
    let dir = tempdir().unwrap();

    let output = iconpad(dir.path())
        .arg("other.png")
        .output()
        .expect("spawn iconpad");

    assert_eq!(output.status.code(), Some(2));
}
