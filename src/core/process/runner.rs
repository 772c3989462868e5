// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! resolve_program()      bare name --> which (PATH of env if set)
//!   |
//!   v
//! build_command()        args, cwd, env, stdio, kill_on_drop
//!   |
//!   v
//! status() | output()    output() only when stdout is captured
//!   |
//!   v
//! exit code == 0 ? ProcessOutput : ProcessError::NonZeroExit
//! ```

use std::path::{Component, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, RaiseResult};

/// Exit code recorded when the child was terminated without one (signals).
const NO_EXIT_CODE: i32 = -1;

impl ProcessBuilder {
    /// Spawns the process and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `ProcessError::ExecutableNotFound` if a bare program name is not in PATH.
    /// - `ProcessError::SpawnFailed` if the child could not be started.
    /// - `ProcessError::NonZeroExit` if the process exits with a non-zero status.
    pub async fn run(&self) -> RaiseResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let program = self.resolve_program()?;
        let mut command = self.build_command(program);

        let output = if self.stdout_config().contains(StreamFlags::KEEP_IN_STRING) {
            let out = command
                .output()
                .await
                .map_err(|source| spawn_failed(&cmd_line, source))?;
            ProcessOutput::new(
                out.status.code().unwrap_or(NO_EXIT_CODE),
                String::from_utf8_lossy(&out.stdout).into_owned(),
            )
        } else {
            let status = command
                .status()
                .await
                .map_err(|source| spawn_failed(&cmd_line, source))?;
            ProcessOutput::new(status.code().unwrap_or(NO_EXIT_CODE), String::new())
        };

        if !output.success() {
            debug!(process = %name, exit_code = output.exit_code(), "failed");
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Resolves bare program names through PATH.
    ///
    /// Paths with a directory component are used as given. When an explicit
    /// environment is set, its `PATH` is searched instead of the parent's.
    fn resolve_program(&self) -> RaiseResult<PathBuf> {
        let program = self.program();
        let mut components = program.components();
        let is_bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_bare {
            return Ok(program.to_path_buf());
        }

        let name = program.to_string_lossy();
        let not_found = || ProcessError::ExecutableNotFound {
            name: name.to_string(),
        };

        match self.environment().and_then(|env| env.get("PATH")) {
            Some(path) => {
                let cwd = self
                    .working_dir()
                    .map(PathBuf::from)
                    .or_else(|| std::env::current_dir().ok())
                    .unwrap_or_default();
                which::which_in(program, Some(path), cwd).map_err(|_| not_found().into())
            }
            None => Self::find(&name).ok_or_else(|| not_found().into()),
        }
    }

    fn build_command(&self, program: PathBuf) -> Command {
        let mut command = Command::new(program);
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        command.stdin(Stdio::null());
        command.stdout(stdio_from_flags(self.stdout_config()));
        command.stderr(Stdio::inherit());
        command.kill_on_drop(true);

        command
    }
}

fn spawn_failed(command: &str, source: std::io::Error) -> ProcessError {
    ProcessError::SpawnFailed {
        command: command.to_string(),
        source,
    }
}

fn stdio_from_flags(flags: StreamFlags) -> Stdio {
    if flags.contains(StreamFlags::KEEP_IN_STRING) {
        Stdio::piped()
    } else {
        Stdio::inherit()
    }
}
