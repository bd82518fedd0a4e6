//! Library-level pipeline tests.

use std::fs;

use plist::Value;
use tempfile::TempDir;

use vlc_recent_cleanup::{document, run, CleanupConfig};

use crate::common::{read_list, read_position_keys, write_fixture};

fn ext_config(exts: &[&str]) -> CleanupConfig {
    CleanupConfig::new(exts.iter().map(|e| e.to_string()), [], false).unwrap()
}

#[test]
fn extension_pass_filters_both_structures() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("prefs.plist");
    write_fixture(
        &target,
        &[
            "file:///music/a.mp3",
            "file:///music/a.mp3",
            "file:///movies/b.mkv",
            "http://stream.example/radio.mp3",
        ],
        &[("file:///music/a.mp3", 10), ("file:///movies/b.mkv", 20)],
    );

    let removed = run(&ext_config(&["mp3"]), &target).unwrap();

    assert_eq!(
        removed.into_iter().collect::<Vec<_>>(),
        vec!["file:///music/a.mp3".to_string()]
    );
    // Stream URL is scheme-exempt; duplicates are all gone; order kept.
    assert_eq!(
        read_list(&target),
        vec![
            "file:///movies/b.mkv".to_string(),
            "http://stream.example/radio.mp3".to_string(),
        ]
    );
    assert_eq!(
        read_position_keys(&target),
        vec!["file:///movies/b.mkv".to_string()]
    );
}

#[test]
fn backup_holds_the_pre_run_bytes() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("prefs.plist");
    write_fixture(&target, &["file:///music/a.mp3"], &[]);
    let original = fs::read(&target).unwrap();

    run(&ext_config(&["mp3"]), &target).unwrap();

    let backup = document::backup_path(&target);
    assert_eq!(fs::read(&backup).unwrap(), original);
}

#[test]
fn second_identical_run_removes_nothing() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("prefs.plist");
    write_fixture(
        &target,
        &["file:///music/a.mp3", "file:///movies/b.mkv"],
        &[("file:///music/a.mp3", 10)],
    );

    let first = run(&ext_config(&["mp3"]), &target).unwrap();
    assert_eq!(first.len(), 1);

    let second = run(&ext_config(&["mp3"]), &target).unwrap();
    assert!(second.is_empty());
}

#[test]
fn directory_pass_respects_prefix_boundary() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("prefs.plist");
    let media_dir = dir.path().join("watched");
    let inside = format!("file://{}/movie.mp4", media_dir.display());
    let lookalike = format!("file://{}foo/movie.mp4", media_dir.display());
    write_fixture(&target, &[&inside, &lookalike], &[]);

    let config = CleanupConfig::new(
        [],
        [media_dir.to_string_lossy().into_owned()],
        false,
    )
    .unwrap();
    let removed = run(&config, &target).unwrap();

    assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![inside]);
    assert_eq!(read_list(&target), vec![lookalike]);
}

#[test]
fn unrelated_keys_survive_the_rewrite() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("prefs.plist");
    write_fixture(&target, &["file:///music/a.mp3"], &[]);

    run(&ext_config(&["mp3"]), &target).unwrap();

    let value = Value::from_file(&target).unwrap();
    assert_eq!(
        value.as_dictionary().unwrap().get("NSWindow Frame"),
        Some(&Value::from("0 0 800 600"))
    );
}

#[test]
fn missing_target_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("does-not-exist.plist");

    let err = run(&ext_config(&["mp3"]), &target).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.plist"));
}
