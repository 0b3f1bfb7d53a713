//! Integration tests for the ascii-tree binary.
//!
//! These tests run the compiled binary and verify output against golden
//! `.keys` / `.expect.txt` pairs in tests/golden.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the binary cargo built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ascii-tree"))
}

/// Get the golden files directory.
fn golden_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("golden");
    path
}

/// Run the binary with the given stdin input and CLI args.
fn run_raw(input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(input.as_bytes()).ok();
    }
    child.wait_with_output().expect("Failed to wait for binary")
}

/// Run the binary and require success. Returns stdout.
fn run_binary(input: &str, args: &[&str]) -> String {
    let output = run_raw(input, args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

/// Find all (name, keys_file, expect_file) triples in the golden directory.
fn find_golden_pairs() -> Vec<(String, PathBuf, PathBuf)> {
    let dir = golden_dir();
    let mut pairs = Vec::new();
    if let Ok(entries) = fs::read_dir(&dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("keys") {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let expect_path = dir.join(format!("{}.expect.txt", name));
                if expect_path.exists() {
                    pairs.push((name, path, expect_path));
                }
            }
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

// ─── Golden file tests ──────────────────────────────────────────────────────

#[test]
fn test_all_golden_files_match() {
    let pairs = find_golden_pairs();
    assert!(!pairs.is_empty(), "No golden pairs found in {:?}", golden_dir());

    let mut failures = Vec::new();
    for (name, keys_file, expect_file) in &pairs {
        let keys = fs::read_to_string(keys_file)
            .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", keys_file, e));
        let expected = fs::read_to_string(expect_file)
            .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", expect_file, e));

        let actual = run_binary(&keys, &[]);
        if actual != expected {
            failures.push(format!(
                "FAIL: {}\n--- expected\n{}--- actual\n{}",
                name, expected, actual
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Golden file mismatches ({}/{}):\n{}",
            failures.len(),
            pairs.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_golden_via_input_flag() {
    let keys = golden_dir().join("small_bst.keys");
    let expected = fs::read_to_string(golden_dir().join("small_bst.expect.txt")).unwrap();
    let actual = run_binary("", &["--input", keys.to_str().unwrap()]);
    assert_eq!(actual, expected);
}

// ─── CLI behaviour ──────────────────────────────────────────────────────────

#[test]
fn test_positional_keys() {
    assert_eq!(run_binary("", &["2", "1", "3"]), "  2\n / \\\n1   3\n");
}

#[test]
fn test_negative_keys() {
    assert_eq!(
        run_binary("", &["0", "-1", "1"]),
        "   0\n  / \\\n /   \\\n-1    1\n"
    );
}

#[test]
fn test_gap_flag() {
    assert_eq!(
        run_binary("2 1 3", &["--gap", "5"]),
        "   2\n  / \\\n /   \\\n1     3\n"
    );
}

#[test]
fn test_empty_input_prints_nothing() {
    assert_eq!(run_binary("", &[]), "");
}

#[test]
fn test_max_height_appends_notice() {
    let out = run_binary("1 2 3 4 5 6", &["--max-height", "4"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[4],
        "(This tree is taller than 4, and may be drawn incorrectly.)"
    );
}

#[test]
fn test_output_flag_writes_file() {
    let path = std::env::temp_dir().join(format!("ascii-tree-e2e-{}.txt", std::process::id()));
    let stdout = run_binary("2 1 3", &["--output", path.to_str().unwrap()]);
    assert_eq!(stdout, "");
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(written, "  2\n / \\\n1   3\n");
}

#[test]
fn test_missing_input_file_fails() {
    let output = run_raw("", &["--input", "/nonexistent/ascii-tree/keys.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot read"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_min_delta_fails() {
    let output = run_raw("1 2", &["--min-delta", "1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr: {}", stderr);
}

#[test]
fn test_oversized_gap_fails() {
    let output = run_raw("2 1 3", &["--gap", "100000"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gap must be at most 2000"), "stderr: {}", stderr);
}
