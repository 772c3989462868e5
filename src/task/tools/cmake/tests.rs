// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::CmakeTool;
use crate::config::Config;
use crate::task::tools::Tool;

#[test]
fn test_cmake_configure_command() {
    let config = Config::default();
    let tool = CmakeTool::new("build/Release")
        .typed_definition(
            "CMAKE_TOOLCHAIN_FILE",
            "PATH",
            "./conan/Release/conan_toolchain.cmake",
        )
        .definition("CMAKE_BUILD_TYPE", "Release");

    assert_eq!(tool.name(), "cmake configure");
    insta::assert_snapshot!(
        tool.command(&config).command_line(),
        @"cmake ./ -GNinja -DCMAKE_BUILD_TYPE=Release -DCMAKE_TOOLCHAIN_FILE:PATH=./conan/Release/conan_toolchain.cmake -B./build/Release"
    );
}

#[test]
fn test_cmake_configure_uses_configured_generator() {
    let mut config = Config::default();
    config.cmake.generator = "Unix Makefiles".to_string();

    let process = CmakeTool::new("/tmp/build").command(&config);
    insta::assert_snapshot!(process.command_line(), @r#"cmake ./ "-GUnix Makefiles" -B/tmp/build"#);
}

#[test]
fn test_cmake_build_command() {
    let mut config = Config::default();
    config.tools.cmake = "/usr/local/bin/cmake".into();

    let tool = CmakeTool::new("build/Debug").build_op();
    assert_eq!(tool.name(), "cmake build");
    insta::assert_snapshot!(
        tool.command(&config).command_line(),
        @"/usr/local/bin/cmake --build ./build/Debug"
    );
}
