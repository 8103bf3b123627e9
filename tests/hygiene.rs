//! Hygiene: enforces coding standards at test time
//!
//! Scans the production sources under `src/` for antipatterns. Browser
//! callbacks have nowhere to propagate a panic to, so every budget is zero:
//! DOM failures go through `BehaviorError` and `error::report` instead.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut paths = Vec::new();
    collect_rs_paths(Path::new("src"), &mut paths);
    paths
        .into_iter()
        .filter(|path| !path.to_string_lossy().ends_with("_test.rs"))
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            Some(SourceFile { path: path.to_string_lossy().into_owned(), content })
        })
        .collect()
}

fn collect_rs_paths(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_paths(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

/// Fail when `pattern` appears on more than `max` lines across `src/`.
fn assert_budget(pattern: &str, max: usize, hint: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let hits = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| format!("  {}: {count}", file.path))
        })
        .collect::<Vec<_>>();
    let total = files
        .iter()
        .map(|file| file.content.lines().filter(|line| line.contains(pattern)).count())
        .sum::<usize>();

    assert!(
        total <= max,
        "`{pattern}` budget exceeded: found {total}, max {max}. {hint}\n{}",
        hits.join("\n")
    );
}

// Panics: these abort the wasm instance.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0, "Propagate with `?` or handle the None/Err case.");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0, "Propagate with `?` or handle the None/Err case.");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0, "");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0, "");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0, "");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0, "");
}

// Silent loss: discards errors without inspecting.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0, "Route the result through `error::report`.");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0, "Match on the result or convert with `?`.");
}

// Style / structure.

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0, "Delete the code instead.");
}
