//! Integration tests for csv-replace
//!
//! These tests drive the compiled binary against real files in temporary
//! directories and assert on exit codes, output, and the exact bytes left
//! on disk afterwards.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three-column fixture shared across the suites.
#[allow(unused)]
pub const INPUT: &str = "foo,bar,baz\r\n1,apple,orange\r\n2,pear,orange\r\n3,apple,melon\r\n";

/// Writes `content` to `name` inside a fresh temporary directory.
#[allow(unused)]
pub fn write_csv(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    (temp, path)
}

/// Helper to run a replace command
pub fn run_replace(
    file: &Path,
    column: &str,
    old_value: &str,
    new_value: &str,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("csv-replace");
    cmd.arg(file)
        .arg(column)
        .arg(old_value)
        .arg(new_value)
        .args(extra_args);

    cmd.assert()
}

/// Number of directory entries; used to prove no temporary file leaked.
#[allow(unused)]
pub fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}
