// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ConanTool;
use crate::config::Config;
use crate::config::types::BuildType;
use crate::task::tools::Tool;

#[test]
fn test_conan_install_release() {
    let config = Config::default();
    let tool = ConanTool::install("conan/Release", BuildType::Release);

    insta::assert_snapshot!(
        tool.command(&config).command_line(),
        @"conan install . --output-folder=conan/Release --build=missing -s build_type=Release"
    );
}

#[test]
fn test_conan_install_configured_tool() {
    let mut config = Config::default();
    config.tools.conan = "/opt/conan/bin/conan".into();

    let tool = ConanTool::install("out/Debug", BuildType::Debug);
    insta::assert_snapshot!(
        tool.command(&config).command_line(),
        @"/opt/conan/bin/conan install . --output-folder=out/Debug --build=missing -s build_type=Debug"
    );
}
