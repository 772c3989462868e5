// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests of the `raise` binary.
//!
//! Each test runs the binary inside its own temporary project directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

fn raise_in(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("raise");
    cmd.current_dir(dir.path());
    cmd
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("CMakeLists.txt"), "project(demo)\n").unwrap();
    dir
}

// =============================================================================
// Usage
// =============================================================================

#[test]
fn cli_no_subcommand_is_usage_error() {
    let dir = project();
    raise_in(&dir)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn cli_conflicting_modes_are_rejected() {
    let dir = project();
    raise_in(&dir)
        .args(["build", "-a", "-r"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn cli_invalid_override_fails() {
    let dir = project();
    raise_in(&dir)
        .args(["--set", "tools.cmake", "build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

// =============================================================================
// Linux tasks
// =============================================================================

#[cfg(target_os = "linux")]
mod linux {
    use super::*;

    #[test]
    fn cli_doc_clean_removes_doc() {
        let dir = project();
        fs::create_dir_all(dir.path().join("doc/latex")).unwrap();
        fs::write(dir.path().join("doc/latex/refman.tex"), "").unwrap();

        raise_in(&dir)
            .args(["doc", "-c"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Raising 'doc clean' on Linux/"))
            .stdout(predicate::str::contains("succeeded"));

        assert!(!dir.path().join("doc").exists());
    }

    #[test]
    fn cli_clean_all_removes_both_build_types() {
        let dir = project();
        for sub in ["build/Release", "build/Debug", "conan/Release", "conan/Debug"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }

        raise_in(&dir).args(["clean", "--all"]).assert().success();

        for sub in ["build/Release", "build/Debug", "conan/Release", "conan/Debug"] {
            assert!(!dir.path().join(sub).exists(), "{sub} still exists");
        }
        assert!(dir.path().join("build").exists());
    }

    #[test]
    fn cli_dry_build_touches_nothing() {
        let dir = project();

        raise_in(&dir)
            .args(["--dry", "build", "-a"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "[dry-run] Would run 'conan install . --output-folder=conan/Release",
            ))
            .stderr(predicate::str::contains("cmake --build ./build/Debug"));

        assert!(!dir.path().join("conan").exists());
        assert!(!dir.path().join("build").exists());
    }

    #[test]
    fn cli_dry_from_environment() {
        let dir = project();
        fs::create_dir(dir.path().join("doc")).unwrap();

        raise_in(&dir)
            .env("RAISE_GLOBAL_DRY", "true")
            .args(["doc", "--clean"])
            .assert()
            .success()
            .stderr(predicate::str::contains("[dry-run] Would remove doc"));

        assert!(dir.path().join("doc").exists());
    }

    #[test]
    fn cli_ignores_unrelated_prefixed_environment() {
        let dir = project();
        fs::create_dir_all(dir.path().join("build/Release")).unwrap();

        raise_in(&dir)
            .env("RAISE_HOME", "/opt/raise")
            .args(["--dry", "clean", "-r"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Failed to load config").not())
            .stderr(predicate::str::contains("[dry-run] Would remove build/Release"));

        assert!(dir.path().join("build/Release").exists());
    }

    #[test]
    fn cli_test_reports_no_task() {
        let dir = project();
        raise_in(&dir)
            .args(["test", "-r"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("No test task specified for Linux"))
            .stdout(predicate::str::contains("Raising 'test release' on Linux/"))
            .stdout(predicate::str::contains("failed"));
    }

    #[test]
    fn cli_missing_tool_exits_127() {
        let dir = project();
        raise_in(&dir)
            .args(["--set", "tools.conan=/nonexistent/bin/conan", "build"])
            .assert()
            .failure()
            .code(127)
            .stdout(predicate::str::contains("Raising 'build release' on Linux/"));
    }
}
