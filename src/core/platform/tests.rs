// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{HostOs, Platform};

#[test]
fn test_os_classification() {
    let names: Vec<_> = ["linux", "macos", "Darwin", "windows", "freebsd", ""]
        .into_iter()
        .map(|name| HostOs::from_name(name).to_string())
        .collect();
    insta::assert_debug_snapshot!(names, @r#"
    [
        "Linux",
        "Darwin",
        "Darwin",
        "Windows",
        "freebsd",
        "",
    ]
    "#);
    assert_eq!(
        HostOs::from_name("freebsd"),
        HostOs::Unknown("freebsd".to_string())
    );
}

#[test]
fn test_target_string() {
    let platform = Platform::new("linux", "x86_64");
    assert_eq!(platform.target(), "Linux/x86_64");
    assert_eq!(platform.os(), &HostOs::Linux);
}

#[test]
fn test_detect_uses_build_target() {
    let platform = Platform::detect();
    assert!(platform.target().ends_with(&format!("/{}", std::env::consts::ARCH)));
    assert_eq!(platform.os(), &HostOs::from_name(std::env::consts::OS));
}
