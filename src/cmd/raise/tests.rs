// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use super::{result_banner, run_raise_command, start_banner};
use crate::cli::Command;
use crate::cli::modes::{BuildModeArgs, DocModeArgs};
use crate::config::Config;
use crate::core::platform::Platform;
use crate::task::executor::Executor;
use crate::task::runner::recording::RecordingRunner;
use crate::task::{Invocation, Subcommand, TaskContext};

fn executor(runner: &Arc<RecordingRunner>, os: &str) -> Executor {
    let ctx = TaskContext::with_runner(
        Arc::new(Config::default()),
        Platform::new(os, "x86_64"),
        runner.clone(),
    );
    Executor::new(ctx)
}

#[test]
fn test_banners() {
    let platform = Platform::new("linux", "x86_64");
    let invocation = Invocation::new(Subcommand::Build, "release");

    insta::assert_snapshot!(start_banner(&invocation, &platform), @"Raising 'build release' on Linux/x86_64...");
    insta::assert_snapshot!(result_banner(&invocation, &platform, 0), @"Raising 'build release' on Linux/x86_64 succeeded");
    insta::assert_snapshot!(result_banner(&invocation, &platform, 127), @"Raising 'build release' on Linux/x86_64 failed");
}

#[tokio::test]
async fn test_missing_command_fails() {
    let runner = Arc::new(RecordingRunner::new());
    let code = run_raise_command(None, &executor(&runner, "linux"), "raise").await;

    assert_eq!(code, 1);
    assert!(runner.recorded().is_empty());
}

#[tokio::test]
async fn test_dispatch_returns_executor_code() {
    let runner = Arc::new(RecordingRunner::new().fail_when("doxygen", 9));
    let executor = executor(&runner, "linux");

    let doc = Command::Doc(DocModeArgs::default());
    assert_eq!(run_raise_command(Some(&doc), &executor, "raise").await, 9);

    let clean = Command::Clean(BuildModeArgs {
        debug: true,
        ..BuildModeArgs::default()
    });
    assert_eq!(run_raise_command(Some(&clean), &executor, "raise").await, 0);
    assert_eq!(runner.descriptions(), [
        "exec doxygen",
        "remove build/Debug",
        "remove conan/Debug"
    ]);
}

#[tokio::test]
async fn test_dispatch_on_unsupported_platform() {
    let runner = Arc::new(RecordingRunner::new());
    let build = Command::Build(BuildModeArgs::default());

    let code = run_raise_command(Some(&build), &executor(&runner, "windows"), "raise").await;
    assert_eq!(code, 1);
    assert!(runner.recorded().is_empty());
}
