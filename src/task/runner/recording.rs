// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fake runner that records requests instead of performing them.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use futures_util::future::BoxFuture;

use super::Runner;
use crate::core::env::container::Env;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, RaiseResult};

/// One request seen by a [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Recorded {
    Exec {
        command: String,
        cwd: Option<PathBuf>,
        env: Option<Env>,
    },
    Remove(PathBuf),
}

impl Recorded {
    /// Single-line rendering used in snapshots.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Exec { command, cwd, .. } => match cwd {
                Some(cwd) => format!("exec {command} (in {})", cwd.display()),
                None => format!("exec {command}"),
            },
            Self::Remove(path) => format!("remove {}", path.display()),
        }
    }
}

/// Records every request; commands can be made to fail by substring.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    log: Mutex<Vec<Recorded>>,
    failures: Vec<(String, i32)>,
    activation_output: String,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Commands whose command line contains `needle` exit with `code`.
    pub(crate) fn fail_when(mut self, needle: impl Into<String>, code: i32) -> Self {
        self.failures.push((needle.into(), code));
        self
    }

    /// Stdout returned to every command that captures its stdout.
    pub(crate) fn with_activation_env(mut self, vars: &[(&str, &str)]) -> Self {
        self.activation_output = vars
            .iter()
            .map(|(k, v)| format!("{k}={v}\0"))
            .collect();
        self
    }

    pub(crate) fn recorded(&self) -> Vec<Recorded> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn descriptions(&self) -> Vec<String> {
        self.recorded().iter().map(Recorded::describe).collect()
    }

    fn push(&self, entry: Recorded) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

impl Runner for RecordingRunner {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn exec<'a>(
        &'a self,
        process: &'a ProcessBuilder,
    ) -> BoxFuture<'a, RaiseResult<ProcessOutput>> {
        Box::pin(async move {
            let command = process.command_line();
            self.push(Recorded::Exec {
                command: command.clone(),
                cwd: process.working_dir().map(Path::to_path_buf),
                env: process.environment().cloned(),
            });

            if let Some((_, code)) = self
                .failures
                .iter()
                .find(|(needle, _)| command.contains(needle.as_str()))
            {
                return Err(ProcessError::NonZeroExit {
                    command,
                    code: *code,
                }
                .into());
            }

            let stdout = if process.stdout_config().contains(StreamFlags::KEEP_IN_STRING) {
                self.activation_output.clone()
            } else {
                String::new()
            };
            Ok(ProcessOutput::new(0, stdout))
        })
    }

    fn remove<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, RaiseResult<()>> {
        Box::pin(async move {
            self.push(Recorded::Remove(path.to_path_buf()));
            Ok(())
        })
    }
}
