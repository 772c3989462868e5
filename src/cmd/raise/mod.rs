// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dispatcher: banners around one executor call.
//!
//! ```text
//! Raising 'build release' on Linux/x86_64...
//!   <tool output>
//! Raising 'build release' on Linux/x86_64 succeeded
//! ```

use tracing::debug;

use crate::cli::Command;
use crate::core::platform::Platform;
use crate::error::FAILURE;
use crate::task::Invocation;
use crate::task::executor::Executor;

/// Line printed before the executor runs.
#[must_use]
pub fn start_banner(invocation: &Invocation, platform: &Platform) -> String {
    format!("Raising '{invocation}' on {}...", platform.target())
}

/// Line printed after the executor returns `code`.
#[must_use]
pub fn result_banner(invocation: &Invocation, platform: &Platform, code: i32) -> String {
    let result = if code == 0 { "succeeded" } else { "failed" };
    format!("Raising '{invocation}' on {} {result}", platform.target())
}

/// Runs the parsed command and returns its exit code.
///
/// `command` is `None` only if clap let a missing subcommand through; that is
/// reported with `prog` and fails without running anything.
pub async fn run_raise_command(command: Option<&Command>, executor: &Executor, prog: &str) -> i32 {
    let Some(command) = command else {
        println!("{prog} requires exactly one sub-command");
        return FAILURE;
    };

    let invocation = command.invocation();
    let platform = executor.platform();

    println!("{}", start_banner(&invocation, platform));
    let code = executor.execute(&invocation).await;
    debug!(%invocation, code, "finished");
    println!("{}", result_banner(&invocation, platform, code));

    code
}

#[cfg(test)]
mod tests;
