// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Platform::detect()
//!     --> Executor --> cmd::raise dispatch --> exit code
//! ```

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use raise_rs::cli::{self, global::GlobalOptions};
use raise_rs::cmd::raise::run_raise_command;
use raise_rs::config::Config;
use raise_rs::core::platform::Platform;
use raise_rs::error::FAILURE;
use raise_rs::logging::init_logging;
use raise_rs::logging::{LogConfig, LogLevel};
use raise_rs::task::TaskContext;
use raise_rs::task::executor::Executor;
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return exit_code(FAILURE);
        }
    };
    for line in config.format_options() {
        debug!("{line}");
    }

    let ctx = TaskContext::new(Arc::new(config), Platform::detect());
    let executor = Executor::new(ctx);

    let code = run_raise_command(cli.command.as_ref(), &executor, &program_name()).await;
    exit_code(code)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or_default();

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

fn load_config(global: &GlobalOptions) -> raise_rs::error::Result<Config> {
    let overrides = global.to_config_overrides();
    Config::builder()
        .with_env_prefix("RAISE")
        .apply_overrides(overrides.as_slice())?
        .build()
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map_or_else(|| "raise".to_string(), |name| name.to_string_lossy().into_owned())
}

/// Maps a task exit code onto the `u8` range of a process exit status.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
