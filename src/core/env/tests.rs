// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use crate::core::env::container::Env;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("foo"), None);
    assert_eq!(env.len(), 1);

    env.set("FOO", "baz");
    assert_eq!(env.get("FOO"), Some("baz"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_env_from_nul_separated() {
    let output = "PATH=/opt/conan/bin:/usr/bin\0CC=gcc-13\0MULTI=line one\nline two\0EQ=a=b\0=skipped\0NOEQUALS\0";
    let env = Env::from_nul_separated(output);

    let vars: Vec<_> = env.iter().collect();
    insta::assert_debug_snapshot!(vars, @r#"
    [
        (
            "CC",
            "gcc-13",
        ),
        (
            "EQ",
            "a=b",
        ),
        (
            "MULTI",
            "line one\nline two",
        ),
        (
            "PATH",
            "/opt/conan/bin:/usr/bin",
        ),
    ]
    "#);
}

#[test]
fn test_env_from_empty_output() {
    assert!(Env::from_nul_separated("").is_empty());
    assert!(Env::from_nul_separated("\0\n").is_empty());
}

#[test]
fn test_env_iter_is_sorted() {
    let mut env = Env::new();
    env.set("B", "2").set("A", "1");

    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["A", "B"]);
}
