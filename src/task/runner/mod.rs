// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Side-effect seam between pipelines and the outside world.
//!
//! ```text
//! Pipeline step
//!      |
//!      v
//! dyn Runner
//!   exec(&ProcessBuilder)  --> ProcessOutput
//!   remove(&Path)          --> ()
//!      |
//!      +-- ProcessRunner    spawns via tokio, removes via tokio::fs
//!      +-- DryRunRunner     logs "[dry-run] Would ..." and succeeds
//!      +-- RecordingRunner  (tests) records every request
//! ```

#[cfg(test)]
pub(crate) mod recording;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{FsError, RaiseResult};

/// Executes the external effects of a pipeline.
pub trait Runner: Send + Sync {
    /// Returns the name of this runner, for logging.
    fn name(&self) -> &'static str;

    /// Runs a process to completion.
    ///
    /// A non-zero exit is reported as `ProcessError::NonZeroExit`.
    fn exec<'a>(&'a self, process: &'a ProcessBuilder)
    -> BoxFuture<'a, RaiseResult<ProcessOutput>>;

    /// Recursively removes a directory. A missing directory is not an error.
    fn remove<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, RaiseResult<()>>;
}

/// Selects the runner for a configuration.
#[must_use]
pub fn select(config: &Config) -> Arc<dyn Runner> {
    if config.global.dry {
        Arc::new(DryRunRunner)
    } else {
        Arc::new(ProcessRunner)
    }
}

/// Runs processes and touches the filesystem for real.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn name(&self) -> &'static str {
        "process"
    }

    fn exec<'a>(
        &'a self,
        process: &'a ProcessBuilder,
    ) -> BoxFuture<'a, RaiseResult<ProcessOutput>> {
        Box::pin(process.run())
    }

    fn remove<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, RaiseResult<()>> {
        Box::pin(async move {
            debug!(path = %path.display(), "rm -rf");
            match tokio::fs::remove_dir_all(path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "nothing to remove");
                    Ok(())
                }
                Err(source) => Err(FsError::RemoveFailed {
                    path: path.display().to_string(),
                    source,
                }
                .into()),
            }
        })
    }
}

/// Logs every request instead of performing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl Runner for DryRunRunner {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn exec<'a>(
        &'a self,
        process: &'a ProcessBuilder,
    ) -> BoxFuture<'a, RaiseResult<ProcessOutput>> {
        Box::pin(async move {
            match process.working_dir() {
                Some(cwd) => info!(
                    "[dry-run] Would run '{}' in {}",
                    process.command_line(),
                    cwd.display()
                ),
                None => info!("[dry-run] Would run '{}'", process.command_line()),
            }
            Ok(ProcessOutput::empty())
        })
    }

    fn remove<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, RaiseResult<()>> {
        Box::pin(async move {
            info!("[dry-run] Would remove {}", path.display());
            Ok(())
        })
    }
}
