// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task execution system.
//!
//! # Architecture
//!
//! ```text
//! Invocation { subcommand, mode }
//!      |
//!      v
//!   Executor ----> TaskContext (config, platform, runner)
//!      |   validate mode, expand `all`
//!      v
//!   Backend  Reference | Unsupported | Undetectable
//!      |
//!      v
//!   Pipeline [Step, Step, ...]
//!      |        Exec | Activate | Deactivate | Remove
//!      v
//!   Runner   ProcessRunner | DryRunRunner
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Invocation`] | Parsed subcommand plus its raw mode string |
//! | [`BuildMode`] | Mode of build/rebuild/clean/test |
//! | [`DocMode`] | Mode of doc |
//! | [`TaskContext`] | Config, platform and runner shared by all tasks |
//! | [`executor::Executor`] | One entry point per subcommand, returns the exit code |
//! | [`backend::Backend`] | OS dispatch, selected once per process |

pub mod backend;
pub mod executor;
pub mod pipeline;
pub mod runner;
pub mod tools;

#[cfg(test)]
mod test_utils;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::Config;
use crate::config::types::BuildType;
use crate::core::platform::Platform;
use crate::error::TaskError;
use runner::Runner;

/// Subcommand selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    Build,
    Rebuild,
    Clean,
    Test,
    Doc,
}

impl Subcommand {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Rebuild => "rebuild",
            Self::Clean => "clean",
            Self::Test => "test",
            Self::Doc => "doc",
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode of `build`, `rebuild`, `clean` and `test`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Release,
    Debug,
    /// Release, then debug.
    All,
}

impl BuildMode {
    /// Build types this mode covers, in execution order.
    #[must_use]
    pub const fn build_types(self) -> &'static [BuildType] {
        match self {
            Self::Release => &[BuildType::Release],
            Self::Debug => &[BuildType::Debug],
            Self::All => &[BuildType::Release, BuildType::Debug],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Debug => "debug",
            Self::All => "all",
        }
    }
}

impl FromStr for BuildMode {
    type Err = TaskError;

    /// Mode strings are matched exactly; `Release` is not `release`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release" => Ok(Self::Release),
            "debug" => Ok(Self::Debug),
            "all" => Ok(Self::All),
            _ => Err(TaskError::UnsupportedMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Mode of `doc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocMode {
    Internal,
    Official,
    /// Remove the generated documentation.
    Clean,
}

impl DocMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Official => "official",
            Self::Clean => "clean",
        }
    }
}

impl FromStr for DocMode {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(Self::Internal),
            "official" => Ok(Self::Official),
            "clean" => Ok(Self::Clean),
            _ => Err(TaskError::UnsupportedMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// A subcommand together with its mode, as selected on the command line.
///
/// The mode stays a string until the executor validates it, so a mode that is
/// not in the subcommand's set is rejected there with a task error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub subcommand: Subcommand,
    pub mode: String,
}

impl Invocation {
    #[must_use]
    pub fn new(subcommand: Subcommand, mode: impl Into<String>) -> Self {
        Self {
            subcommand,
            mode: mode.into(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subcommand, self.mode)
    }
}

/// Context provided to tasks during execution.
#[derive(Clone)]
pub struct TaskContext {
    config: Arc<Config>,
    platform: Platform,
    runner: Arc<dyn Runner>,
}

impl TaskContext {
    /// Creates a context with the runner selected by `config.global.dry`.
    #[must_use]
    pub fn new(config: Arc<Config>, platform: Platform) -> Self {
        let runner = runner::select(&config);
        Self::with_runner(config, platform, runner)
    }

    /// Creates a context with an explicit runner.
    #[must_use]
    pub fn with_runner(config: Arc<Config>, platform: Platform, runner: Arc<dyn Runner>) -> Self {
        Self {
            config,
            platform,
            runner,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn platform(&self) -> &Platform {
        &self.platform
    }

    #[must_use]
    pub fn runner(&self) -> &dyn Runner {
        self.runner.as_ref()
    }
}

impl fmt::Debug for TaskContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskContext")
            .field("platform", &self.platform)
            .field("runner", &self.runner.name())
            .finish_non_exhaustive()
    }
}
