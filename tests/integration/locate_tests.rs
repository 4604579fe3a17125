use std::fs;
use std::path::{Path, PathBuf};

use upfind_core::{locate, LocateError, SearchConfig};

/// A sandbox holding `<tmp>/a/b/c`. Searches are bounded at `<tmp>` so the
/// host filesystem above it never influences a result.
struct Sandbox {
    tmp: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("b").join("c")).unwrap();
        Self { tmp }
    }

    fn path(&self, rel: &str) -> PathBuf {
        rel.split('/')
            .filter(|s| !s.is_empty())
            .fold(self.tmp.path().to_path_buf(), |p, s| p.join(s))
    }

    fn touch(&self, rel: &str) {
        fs::write(self.path(rel), b"").unwrap();
    }

    fn search(&self, target: &str, start: &str) -> SearchConfig {
        SearchConfig::new(target)
            .start_directory(self.path(start))
            .stop_directory(self.tmp.path())
    }
}

fn is_not_found(result: &Result<PathBuf, LocateError>) -> bool {
    matches!(result, Err(LocateError::NotFound { .. }))
}

// === Scenario: target two levels above the start ===
#[test]
fn test_target_in_grandparent_is_found() {
    let sb = Sandbox::new();
    sb.touch("a/x");

    let found = locate(&sb.search("x", "a/b/c")).unwrap();
    assert_eq!(found, sb.path("a/x"));
}

// === Scenario: marker between start and target ===
#[test]
fn test_marker_blocks_target_above_it() {
    let sb = Sandbox::new();
    sb.touch("a/b/.stop");
    sb.touch("a/x");

    let result = locate(&sb.search("x", "a/b/c").stop_marker(".stop"));
    assert!(is_not_found(&result));
}

#[test]
fn test_marker_and_target_together_is_success() {
    let sb = Sandbox::new();
    sb.touch("a/b/.stop");
    sb.touch("a/b/x");

    let found = locate(&sb.search("x", "a/b/c").stop_marker(".stop")).unwrap();
    assert_eq!(found, sb.path("a/b/x"));
}

#[test]
fn test_marker_below_target_still_wins_when_target_is_nearer() {
    let sb = Sandbox::new();
    sb.touch("a/b/c/x");
    sb.touch("a/b/.stop");

    let found = locate(&sb.search("x", "a/b/c").stop_marker(".stop")).unwrap();
    assert_eq!(found, sb.path("a/b/c/x"));
}

// === Scenario: stop directory ===
#[test]
fn test_stop_directory_equal_to_start_fails_immediately() {
    let sb = Sandbox::new();
    sb.touch("a/b/c/x");

    let config = SearchConfig::new("x")
        .start_directory(sb.path("a/b/c"))
        .stop_directory(sb.path("a/b/c"));
    assert!(is_not_found(&locate(&config)));
}

#[test]
fn test_stop_directory_is_never_scanned() {
    let sb = Sandbox::new();
    sb.touch("a/x");

    let config = SearchConfig::new("x")
        .start_directory(sb.path("a/b/c"))
        .stop_directory(sb.path("a"));
    assert!(is_not_found(&locate(&config)));
}

// Integration tests run with the package directory as working directory,
// which holds this crate's Cargo.toml.
#[test]
fn test_relative_start_and_stop_resolve_to_same_directory() {
    assert!(Path::new("Cargo.toml").exists());

    let config = SearchConfig::new("Cargo.toml")
        .start_directory(".")
        .stop_directory(".");
    assert!(is_not_found(&locate(&config)));
}

#[test]
fn test_relative_start_resolves_against_working_directory() {
    let cwd = std::env::current_dir().unwrap();
    let config = SearchConfig::new("Cargo.toml").start_directory("../integration");

    let found = locate(&config).unwrap();
    assert!(found.is_absolute());
    assert_eq!(found.parent().unwrap().file_name(), cwd.file_name());
    assert_eq!(found.file_name().unwrap(), "Cargo.toml");
}

// === Scenario: nothing anywhere ===
#[test]
fn test_missing_target_reaches_root_and_fails() {
    let sb = Sandbox::new();
    let config = SearchConfig::new("upfind-integration-absent-5d2b90").start_directory(sb.path("a/b/c"));

    let err = locate(&config).unwrap_err();
    assert_eq!(err.to_string(), "file not found: upfind-integration-absent-5d2b90");
}

#[test]
fn test_found_path_is_absolute_and_clean() {
    let sb = Sandbox::new();
    sb.touch("a/x");

    let config = sb.search("b/../x", "a/b/c");
    let found = locate(&config).unwrap();
    assert!(found.is_absolute());
    assert_eq!(found, sb.path("a/x"));
}
