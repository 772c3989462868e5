// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, ProcessError, RaiseError, RaiseResult, TaskError};

#[test]
fn test_task_error_display() {
    let unsupported = TaskError::UnsupportedMode {
        mode: "foo".to_string(),
    };
    insta::assert_snapshot!(unsupported.to_string(), @"Build-mode foo not supported or unknown");

    let platform = TaskError::UnsupportedPlatform {
        task: "documentation",
        os: "Darwin".to_string(),
    };
    insta::assert_snapshot!(platform.to_string(), @"No documentation task specified for Darwin");
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidOverride("tools.cmake".to_string());
    insta::assert_snapshot!(err.to_string(), @"invalid override 'tools.cmake', expected KEY=VALUE");
}

#[test]
fn test_task_error_is_transparent() {
    let err = RaiseError::from(TaskError::AggregateTestMode {
        mode: "all".to_string(),
    });
    insta::assert_snapshot!(
        err.to_string(),
        @"Build-mode all not supported for testing. Choose 'release' or 'debug'."
    );
}

#[test]
fn test_exit_codes() {
    let codes = vec![
        (
            "unsupported_mode",
            RaiseError::from(TaskError::UnsupportedMode {
                mode: "foo".to_string(),
            })
            .exit_code(),
        ),
        (
            "non_zero_exit",
            RaiseError::from(ProcessError::NonZeroExit {
                command: "cmake".to_string(),
                code: 2,
            })
            .exit_code(),
        ),
        (
            "signalled",
            RaiseError::from(ProcessError::NonZeroExit {
                command: "cmake".to_string(),
                code: -1,
            })
            .exit_code(),
        ),
        (
            "not_found",
            RaiseError::from(ProcessError::ExecutableNotFound {
                name: "conan".to_string(),
            })
            .exit_code(),
        ),
    ];
    insta::assert_debug_snapshot!(codes, @r#"
    [
        (
            "unsupported_mode",
            1,
        ),
        (
            "non_zero_exit",
            2,
        ),
        (
            "signalled",
            1,
        ),
        (
            "not_found",
            127,
        ),
    ]
    "#);
}

#[test]
fn test_raise_error_size() {
    let size = std::mem::size_of::<RaiseError>();
    assert!(size <= 16, "RaiseError is {size} bytes, expected <= 16");
}

#[test]
fn test_raise_result_size() {
    let size = std::mem::size_of::<RaiseResult<()>>();
    assert!(size <= 16, "RaiseResult<()> is {size} bytes, expected <= 16");
}
