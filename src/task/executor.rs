// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One entry point per subcommand.
//!
//! ```text
//! execute(Invocation)
//!   build   mode --> BuildMode --> [Release, Debug] --> Backend::build   each
//!   rebuild mode --> BuildMode --> clean each --> (all ok) --> build each
//!   clean   mode --> BuildMode --> Backend::clean each
//!   test    mode --> BuildMode (not All) --> Backend::test
//!   doc     mode --> DocMode --> Backend::doc
//!
//! For `all` every build type runs; the result is the first non-zero code.
//! The platform is checked before `all` is expanded, so an unsupported host
//! reports once per invocation.
//! ```
//!
//! Failures are written to the diagnostics sink (stderr unless replaced),
//! once, and turned into exit codes.

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::backend::{Backend, TaskKind};
use super::{BuildMode, DocMode, Invocation, Subcommand, TaskContext};
use crate::config::types::BuildType;
use crate::core::platform::Platform;
use crate::error::{RaiseResult, TaskError};

/// Runs invocations against the backend selected for the context's platform.
pub struct Executor {
    ctx: TaskContext,
    backend: Backend,
    diagnostics: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("ctx", &self.ctx)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl Executor {
    /// Creates an executor that reports failures on stderr.
    #[must_use]
    pub fn new(ctx: TaskContext) -> Self {
        let backend = Backend::select(ctx.platform());
        Self {
            ctx,
            backend,
            diagnostics: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Sends failure messages to `sink` instead of stderr.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_diagnostics(self, sink: impl Write + Send + 'static) -> Self {
        Self {
            diagnostics: Mutex::new(Box::new(sink)),
            ..self
        }
    }

    #[must_use]
    pub const fn platform(&self) -> &Platform {
        self.ctx.platform()
    }

    /// Runs an invocation and returns its exit code.
    pub async fn execute(&self, invocation: &Invocation) -> i32 {
        debug!(%invocation, "execute");
        let mode = invocation.mode.as_str();
        match invocation.subcommand {
            Subcommand::Build => self.build(mode).await,
            Subcommand::Rebuild => self.rebuild(mode).await,
            Subcommand::Clean => self.clean(mode).await,
            Subcommand::Test => self.test(mode),
            Subcommand::Doc => self.doc(mode).await,
        }
    }

    pub async fn build(&self, mode: &str) -> i32 {
        match self.build_types(mode) {
            Ok(types) => self.build_each(types).await,
            Err(e) => self.report(Err(e)),
        }
    }

    /// Cleans every selected build type, then builds them if all cleaning
    /// succeeded.
    pub async fn rebuild(&self, mode: &str) -> i32 {
        let types = match self.build_types(mode) {
            Ok(types) => types,
            Err(e) => return self.report(Err(e)),
        };

        let code = self.clean_each(types).await;
        if code != 0 {
            return code;
        }
        self.build_each(types).await
    }

    pub async fn clean(&self, mode: &str) -> i32 {
        match self.build_types(mode) {
            Ok(types) => self.clean_each(types).await,
            Err(e) => self.report(Err(e)),
        }
    }

    /// No platform defines a test task, so this only ever validates and fails.
    #[must_use]
    pub fn test(&self, mode: &str) -> i32 {
        self.report(self.try_test(mode))
    }

    pub async fn doc(&self, mode: &str) -> i32 {
        match mode.parse::<DocMode>() {
            Ok(mode) => self.report(self.backend.doc(&self.ctx, mode).await),
            Err(e) => self.report(Err(e.into())),
        }
    }

    /// Validates a build mode and the host, then expands the mode.
    fn build_types(&self, mode: &str) -> RaiseResult<&'static [BuildType]> {
        let mode = mode.parse::<BuildMode>()?;
        self.backend.supports(TaskKind::Build)?;
        Ok(mode.build_types())
    }

    fn try_test(&self, mode: &str) -> RaiseResult<()> {
        match mode.parse::<BuildMode>()? {
            BuildMode::All => Err(TaskError::AggregateTestMode {
                mode: mode.to_string(),
            }
            .into()),
            BuildMode::Release => self.backend.test(BuildType::Release),
            BuildMode::Debug => self.backend.test(BuildType::Debug),
        }
    }

    async fn build_each(&self, types: &[BuildType]) -> i32 {
        let mut code = 0;
        for &build_type in types {
            let result = self.report(self.backend.build(&self.ctx, build_type).await);
            code = first_failure(code, result);
        }
        code
    }

    async fn clean_each(&self, types: &[BuildType]) -> i32 {
        let mut code = 0;
        for &build_type in types {
            let result = self.report(self.backend.clean(&self.ctx, build_type).await);
            code = first_failure(code, result);
        }
        code
    }

    /// Writes a failure to the diagnostics sink and maps the result to an
    /// exit code.
    fn report(&self, result: RaiseResult<()>) -> i32 {
        match result {
            Ok(()) => 0,
            Err(e) => {
                let mut sink = self
                    .diagnostics
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                let _ = writeln!(sink, "{e}");
                let _ = sink.flush();
                e.exit_code()
            }
        }
    }
}

const fn first_failure(current: i32, next: i32) -> i32 {
    if current == 0 { next } else { current }
}
